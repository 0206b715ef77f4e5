use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use parking_lot::Mutex;

use super::{
    concurrent::SolveError,
    node::{NodeRef, SearchNode},
    stats::{SolveStats, SolveStatsSnapshot},
};
use crate::puzzle::{HashVisitedSet, NullObserver, ProgressObserver, Puzzle, VisitedSet};

type DynVisited<Z> = Arc<dyn VisitedSet<<Z as Puzzle>::Position>>;
type DynObserver<Z> = Arc<dyn ProgressObserver<<Z as Puzzle>::Position, <Z as Puzzle>::Move>>;

pub struct SequentialSolver<Z: Puzzle> {
    puzzle: Arc<Z>,
    visited: Option<DynVisited<Z>>,
    observer: DynObserver<Z>,
    stop_flag: Arc<AtomicBool>,
    last_stats: Mutex<SolveStatsSnapshot>,
}

impl<Z: Puzzle> SequentialSolver<Z> {
    #[must_use]
    pub fn new(puzzle: Z) -> Self {
        Self::with_observer(puzzle, Arc::new(NullObserver))
    }

    #[must_use]
    pub fn with_observer(puzzle: Z, observer: DynObserver<Z>) -> Self {
        Self::with_visited_and_stop(puzzle, None, observer, &Arc::new(AtomicBool::new(false)))
    }

    #[must_use]
    pub fn with_visited_and_stop(
        puzzle: Z,
        visited: Option<DynVisited<Z>>,
        observer: DynObserver<Z>,
        stop_flag: &Arc<AtomicBool>,
    ) -> Self {
        Self {
            puzzle: Arc::new(puzzle),
            visited,
            observer,
            stop_flag: Arc::clone(stop_flag),
            last_stats: Mutex::new(SolveStatsSnapshot::default()),
        }
    }

    #[must_use]
    pub fn stats_snapshot(&self) -> SolveStatsSnapshot {
        *self.last_stats.lock()
    }

    fn notify_progress(&self, stats: &SolveStats, position: &Z::Position, tries: u64) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.observer.on_progress(position, tries);
        }));
        if outcome.is_err() {
            stats.panicked.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn notify_finished(
        &self,
        stats: &SolveStats,
        path: Option<&[Z::Move]>,
        position: &Z::Position,
        tries: u64,
    ) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.observer.on_finished(path, position, tries);
        }));
        if outcome.is_err() {
            stats.panicked.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn solve(&self) -> Result<Option<Vec<Z::Move>>, SolveError> {
        let visited: DynVisited<Z> = self
            .visited
            .as_ref()
            .map_or_else(|| Arc::new(HashVisitedSet::new()) as DynVisited<Z>, Arc::clone);
        let stats = SolveStats::new();
        let root = SearchNode::new_root(self.puzzle.initial_position());
        let mut frontier: Vec<NodeRef<Z::Position, Z::Move>> = vec![Arc::clone(&root)];
        while let Some(node) = frontier.pop() {
            let tries = stats.tries.fetch_add(1, Ordering::Relaxed).saturating_add(1);
            if self.stop_flag.load(Ordering::Acquire) {
                *self.last_stats.lock() = stats.snapshot();
                return Err(SolveError::Aborted);
            }
            if !visited.mark_if_new(&node.position) {
                stats.pruned_duplicate.fetch_add(1, Ordering::Relaxed);
                self.notify_progress(&stats, &node.position, tries);
                continue;
            }
            self.notify_progress(&stats, &node.position, tries);
            if self.puzzle.is_goal(&node.position) {
                let path = node.path();
                self.notify_finished(&stats, Some(&path), &node.position, tries);
                *self.last_stats.lock() = stats.snapshot();
                return Ok(Some(path));
            }
            stats.expanded.fetch_add(1, Ordering::Relaxed);
            let mut children = Vec::new();
            for mov in self.puzzle.legal_moves(&node.position) {
                let child_position = self.puzzle.apply(&node.position, &mov);
                children.push(SearchNode::expand(&node, mov, child_position));
                stats.children_generated.fetch_add(1, Ordering::Relaxed);
            }
            children.reverse();
            frontier.append(&mut children);
        }
        let tries = stats.tries.load(Ordering::Relaxed);
        self.notify_finished(&stats, None, &root.position, tries);
        *self.last_stats.lock() = stats.snapshot();
        Ok(None)
    }
}
