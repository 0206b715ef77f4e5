use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

pub struct SolveStats {
    pub tries: AtomicU64,
    pub expanded: AtomicU64,
    pub pruned_duplicate: AtomicU64,
    pub pruned_signaled: AtomicU64,
    pub children_generated: AtomicU64,
    pub submitted: AtomicU64,
    pub inline_runs: AtomicU64,
    pub discarded: AtomicU64,
    pub panicked: AtomicU64,
}

impl SolveStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tries: AtomicU64::new(0),
            expanded: AtomicU64::new(0),
            pruned_duplicate: AtomicU64::new(0),
            pruned_signaled: AtomicU64::new(0),
            children_generated: AtomicU64::new(0),
            submitted: AtomicU64::new(0),
            inline_runs: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
            panicked: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SolveStatsSnapshot {
        SolveStatsSnapshot {
            tries: self.tries.load(Ordering::Relaxed),
            expanded: self.expanded.load(Ordering::Relaxed),
            pruned_duplicate: self.pruned_duplicate.load(Ordering::Relaxed),
            pruned_signaled: self.pruned_signaled.load(Ordering::Relaxed),
            children_generated: self.children_generated.load(Ordering::Relaxed),
            submitted: self.submitted.load(Ordering::Relaxed),
            inline_runs: self.inline_runs.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            panicked: self.panicked.load(Ordering::Relaxed),
        }
    }
}

impl Default for SolveStats {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SolveStatsSnapshot {
    pub tries: u64,
    pub expanded: u64,
    pub pruned_duplicate: u64,
    pub pruned_signaled: u64,
    pub children_generated: u64,
    pub submitted: u64,
    pub inline_runs: u64,
    pub discarded: u64,
    pub panicked: u64,
}
