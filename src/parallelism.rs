//! Parallel execution of independent per-target tasks.
//!
//! A [`Parallelism`] value is built from a thread count and decides whether a
//! batch of tasks runs inline on the caller's thread or on a dedicated rayon
//! pool. Either way results come back in task order.

use rayon::prelude::*;
use rayon::ThreadPoolBuildError;

/// Parallelism strategy for fitting independent tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// Run every task on the calling thread, in order.
    #[default]
    Sequential,
    /// Run tasks on a pool of up to `n` worker threads.
    ///
    /// If `n <= 1`, this is equivalent to `Sequential`.
    Parallel(usize),
}

impl Parallelism {
    /// Create a parallelism hint from a thread count.
    ///
    /// - `0` → uses rayon's current thread count
    /// - `1` → sequential
    /// - `n > 1` → parallel with n threads
    #[inline]
    pub fn from_threads(n_threads: usize) -> Self {
        match n_threads {
            0 => Self::Parallel(rayon::current_num_threads()).normalized(),
            1 => Self::Sequential,
            n => Self::Parallel(n),
        }
    }

    /// Returns `true` if parallel execution is allowed.
    #[inline]
    pub fn allows_parallel(self) -> bool {
        matches!(self, Self::Parallel(n) if n > 1)
    }

    /// Returns the thread count hint (1 for sequential).
    #[inline]
    pub fn n_threads(self) -> usize {
        match self {
            Self::Sequential => 1,
            Self::Parallel(n) => n.max(1),
        }
    }

    /// Never spawn more workers than there are tasks.
    #[inline]
    pub fn correct_for_workload(self, n_items: usize) -> Self {
        match self {
            Self::Sequential => Self::Sequential,
            Self::Parallel(n) => Self::Parallel(n.min(n_items)).normalized(),
        }
    }

    fn normalized(self) -> Self {
        if self.allows_parallel() {
            self
        } else {
            Self::Sequential
        }
    }

    /// Runs `task(i)` for every `i` in `0..n_items` and collects the results
    /// by index, regardless of the order in which tasks complete.
    ///
    /// The first error encountered is returned and the remaining results are
    /// discarded. In parallel mode, tasks already running finish before the
    /// call returns.
    pub fn ordered_map<T, E, F>(self, n_items: usize, task: F) -> Result<Vec<T>, E>
    where
        T: Send,
        E: Send + From<ThreadPoolBuildError>,
        F: Fn(usize) -> Result<T, E> + Sync + Send,
    {
        match self.correct_for_workload(n_items) {
            Self::Sequential => (0..n_items).map(task).collect(),
            Self::Parallel(n_threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n_threads)
                    .build()?;
                pool.install(|| (0..n_items).into_par_iter().map(task).collect())
            }
        }
    }
}
