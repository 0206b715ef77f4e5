mod concurrent;
mod latch;
mod node;
mod pool;
mod sequential;
mod stats;

pub use concurrent::{ConcurrentSolver, SearchParams, SolveError, default_num_threads};
pub use latch::ResultLatch;
pub use node::{NodeRef, SearchNode};
pub use pool::{Job, PoolHandle, SubmitError, WorkerPool};
pub use sequential::SequentialSolver;
pub use stats::{SolveStats, SolveStatsSnapshot};
