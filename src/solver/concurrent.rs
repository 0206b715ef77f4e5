use std::{
    fmt,
    num::NonZero,
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    thread,
};

use parking_lot::Mutex;
use rand::{RngExt, rngs::ThreadRng};

use super::{
    latch::ResultLatch,
    node::{NodeRef, SearchNode},
    pool::{PoolHandle, WorkerPool},
    stats::{SolveStats, SolveStatsSnapshot},
};
use crate::puzzle::{HashVisitedSet, NullObserver, ProgressObserver, Puzzle, VisitedSet};

type DynVisited<Z> = Arc<dyn VisitedSet<<Z as Puzzle>::Position>>;
type DynObserver<Z> = Arc<dyn ProgressObserver<<Z as Puzzle>::Position, <Z as Puzzle>::Move>>;

#[must_use]
pub fn default_num_threads() -> usize {
    thread::available_parallelism().map_or(4, NonZero::get)
}

#[derive(Clone, Copy)]
pub struct SearchParams {
    pub mix: f64,
    pub pool_capacity: usize,
    pub num_threads: usize,
}

impl SearchParams {
    #[must_use]
    pub fn new(mix: f64, pool_capacity: usize, num_threads: usize) -> Self {
        assert!((0.0..=1.0).contains(&mix), "mix 必须位于 [0, 1] 区间");
        assert!(pool_capacity > 0, "pool_capacity 必须大于 0");
        assert!(num_threads > 0, "num_threads 必须大于 0");
        Self {
            mix,
            pool_capacity,
            num_threads,
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new(0.4, 1000, default_num_threads())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    Aborted,
    PoolClosed,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aborted => write!(f, "搜索被中止"),
            Self::PoolClosed => write!(f, "工作池已关闭，无法提交初始任务"),
        }
    }
}

impl std::error::Error for SolveError {}

enum Verdict<P, M> {
    Solved(NodeRef<P, M>),
    Exhausted,
    Aborted,
}

impl<P, M> Clone for Verdict<P, M> {
    fn clone(&self) -> Self {
        match self {
            Self::Solved(node) => Self::Solved(Arc::clone(node)),
            Self::Exhausted => Self::Exhausted,
            Self::Aborted => Self::Aborted,
        }
    }
}

struct SearchCore<Z: Puzzle> {
    puzzle: Arc<Z>,
    visited: DynVisited<Z>,
    observer: DynObserver<Z>,
    latch: ResultLatch<Verdict<Z::Position, Z::Move>>,
    outstanding: AtomicU64,
    stop_flag: Arc<AtomicBool>,
    stats: SolveStats,
    pool: PoolHandle,
    mix: f64,
}

struct Task<Z: Puzzle> {
    core: Arc<SearchCore<Z>>,
    node: NodeRef<Z::Position, Z::Move>,
}

impl<Z: Puzzle> Task<Z> {
    fn new(core: &Arc<SearchCore<Z>>, node: NodeRef<Z::Position, Z::Move>) -> Self {
        core.outstanding.fetch_add(1, Ordering::AcqRel);
        Self {
            core: Arc::clone(core),
            node,
        }
    }
}

impl<Z: Puzzle> Drop for Task<Z> {
    fn drop(&mut self) {
        if self.core.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
            let verdict = if self.core.stop_flag.load(Ordering::Acquire) {
                Verdict::Aborted
            } else {
                Verdict::Exhausted
            };
            self.core.latch.publish(verdict);
        }
    }
}

impl<Z: Puzzle> SearchCore<Z> {
    fn run_task(self: &Arc<Self>, task: Task<Z>) {
        let mut rng = rand::rng();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.expand(&task, &mut rng)));
        if outcome.is_err() {
            self.stats.panicked.fetch_add(1, Ordering::Relaxed);
        }
        drop(task);
    }

    fn expand(self: &Arc<Self>, task: &Task<Z>, rng: &mut ThreadRng) {
        let node = &task.node;
        let tries = self
            .stats
            .tries
            .fetch_add(1, Ordering::Relaxed)
            .saturating_add(1);
        if self.latch.is_signaled() || self.stop_flag.load(Ordering::Acquire) {
            self.stats.pruned_signaled.fetch_add(1, Ordering::Relaxed);
            self.notify_progress(&node.position, tries);
            return;
        }
        if !self.visited.mark_if_new(&node.position) {
            self.stats.pruned_duplicate.fetch_add(1, Ordering::Relaxed);
            self.notify_progress(&node.position, tries);
            return;
        }
        self.notify_progress(&node.position, tries);
        if self.puzzle.is_goal(&node.position) {
            self.latch.publish(Verdict::Solved(Arc::clone(node)));
            return;
        }
        self.stats.expanded.fetch_add(1, Ordering::Relaxed);
        for mov in self.puzzle.legal_moves(&node.position) {
            let child_position = self.puzzle.apply(&node.position, &mov);
            let child = SearchNode::expand(node, mov, child_position);
            let child_task = Task::new(self, child);
            self.stats.children_generated.fetch_add(1, Ordering::Relaxed);
            if rng.random_bool(self.mix) {
                self.schedule(child_task);
            } else {
                self.stats.inline_runs.fetch_add(1, Ordering::Relaxed);
                self.expand(&child_task, rng);
            }
        }
    }

    fn schedule(self: &Arc<Self>, task: Task<Z>) {
        let core = Arc::clone(self);
        let job = Box::new(move || core.run_task(task));
        match self.pool.submit(job) {
            Ok(()) => {
                self.stats.submitted.fetch_add(1, Ordering::Relaxed);
            }
            Err(_rejected) => {
                self.stats.discarded.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn notify_progress(&self, position: &Z::Position, tries: u64) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.observer.on_progress(position, tries);
        }));
        if outcome.is_err() {
            self.stats.panicked.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn notify_finished(&self, path: Option<&[Z::Move]>, position: &Z::Position, tries: u64) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.observer.on_finished(path, position, tries);
        }));
        if outcome.is_err() {
            self.stats.panicked.fetch_add(1, Ordering::Relaxed);
        }
    }
}

pub struct ConcurrentSolver<Z: Puzzle> {
    puzzle: Arc<Z>,
    visited: Option<DynVisited<Z>>,
    observer: DynObserver<Z>,
    params: SearchParams,
    stop_flag: Arc<AtomicBool>,
    last_stats: Mutex<SolveStatsSnapshot>,
}

impl<Z: Puzzle> ConcurrentSolver<Z> {
    #[must_use]
    pub fn new(puzzle: Z) -> Self {
        Self::with_params(puzzle, SearchParams::default())
    }

    #[must_use]
    pub fn with_params(puzzle: Z, params: SearchParams) -> Self {
        Self::with_observer(puzzle, params, Arc::new(NullObserver))
    }

    #[must_use]
    pub fn with_observer(puzzle: Z, params: SearchParams, observer: DynObserver<Z>) -> Self {
        Self::with_visited_and_stop(
            puzzle,
            params,
            None,
            observer,
            &Arc::new(AtomicBool::new(false)),
        )
    }

    #[must_use]
    pub fn with_visited_and_stop(
        puzzle: Z,
        params: SearchParams,
        visited: Option<DynVisited<Z>>,
        observer: DynObserver<Z>,
        stop_flag: &Arc<AtomicBool>,
    ) -> Self {
        Self {
            puzzle: Arc::new(puzzle),
            visited,
            observer,
            params,
            stop_flag: Arc::clone(stop_flag),
            last_stats: Mutex::new(SolveStatsSnapshot::default()),
        }
    }

    #[must_use]
    pub const fn params(&self) -> &SearchParams {
        &self.params
    }

    #[must_use]
    pub fn stats_snapshot(&self) -> SolveStatsSnapshot {
        *self.last_stats.lock()
    }

    pub fn solve(&self) -> Result<Option<Vec<Z::Move>>, SolveError> {
        assert!(
            (0.0..=1.0).contains(&self.params.mix),
            "mix 必须位于 [0, 1] 区间"
        );
        let mut pool = WorkerPool::new(self.params.num_threads, self.params.pool_capacity);
        let visited = self
            .visited
            .as_ref()
            .map_or_else(|| fresh_visited::<Z>(), Arc::clone);
        let core = Arc::new(SearchCore {
            puzzle: Arc::clone(&self.puzzle),
            visited,
            observer: Arc::clone(&self.observer),
            latch: ResultLatch::new(),
            outstanding: AtomicU64::new(0),
            stop_flag: Arc::clone(&self.stop_flag),
            stats: SolveStats::new(),
            pool: pool.handle(),
            mix: self.params.mix,
        });
        let root = SearchNode::new_root(self.puzzle.initial_position());
        let seed = Task::new(&core, Arc::clone(&root));
        let seed_core = Arc::clone(&core);
        let seed_job = Box::new(move || seed_core.run_task(seed));
        if core.pool.submit(seed_job).is_err() {
            pool.shutdown();
            *self.last_stats.lock() = core.stats.snapshot();
            return Err(SolveError::PoolClosed);
        }
        core.stats.submitted.fetch_add(1, Ordering::Relaxed);
        let verdict = core.latch.wait();
        let result = match verdict {
            Verdict::Solved(node) => {
                let path = node.path();
                let tries = core.stats.tries.load(Ordering::Relaxed);
                core.notify_finished(Some(&path), &node.position, tries);
                Ok(Some(path))
            }
            Verdict::Exhausted => {
                let tries = core.stats.tries.load(Ordering::Relaxed);
                core.notify_finished(None, &root.position, tries);
                Ok(None)
            }
            Verdict::Aborted => Err(SolveError::Aborted),
        };
        pool.shutdown();
        *self.last_stats.lock() = core.stats.snapshot();
        result
    }
}

fn fresh_visited<Z: Puzzle>() -> DynVisited<Z> {
    Arc::new(HashVisitedSet::new())
}
