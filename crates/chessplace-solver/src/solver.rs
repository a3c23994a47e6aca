//! The public search entry point.

use std::sync::Arc;

use chessplace_config::{SolverConfig, TaskGranularity};
use chessplace_core::{ChessPlaceError, Problem, Result, Solution};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::scheduler::{Search, SearchOutcome};
use crate::statistics::SearchStatistics;

/// Counts or enumerates the peaceable placements of a [`Problem`].
///
/// Each solver owns a fixed-size worker pool which is reused by every call.
/// A solver with one worker still searches on a pool thread.
///
/// # Example
///
/// ```
/// use chessplace_core::{PieceKind, Problem, Size};
/// use chessplace_solver::Solver;
///
/// let problem = Problem::builder(Size::square(8).unwrap())
///     .add_pieces(PieceKind::Queen, 8)
///     .build();
///
/// let solver = Solver::new(4).unwrap();
/// assert_eq!(solver.solve(&problem).unwrap(), 92);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    pool: Arc<ThreadPool>,
    worker_count: usize,
    granularity: TaskGranularity,
    log_progress: bool,
}

impl Solver {
    /// Creates a solver with `worker_count` threads.
    ///
    /// # Errors
    ///
    /// Returns [`ChessPlaceError::InvalidWorkerCount`] for zero workers and
    /// [`ChessPlaceError::ThreadPool`] if the pool cannot be started.
    pub fn new(worker_count: usize) -> Result<Self> {
        if worker_count == 0 {
            return Err(ChessPlaceError::InvalidWorkerCount(worker_count));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .thread_name(|i| format!("chessplace-worker-{}", i))
            .build()
            .map_err(|e| ChessPlaceError::ThreadPool(e.to_string()))?;
        debug!(event = "pool_created", workers = worker_count);

        Ok(Self {
            pool: Arc::new(pool),
            worker_count,
            granularity: TaskGranularity::default(),
            log_progress: false,
        })
    }

    /// Creates a solver from configuration.
    pub fn from_config(config: &SolverConfig) -> Result<Self> {
        Ok(Self::new(config.worker_count.resolve())?
            .with_granularity(config.granularity)
            .with_log_progress(config.log_progress))
    }

    pub fn with_granularity(mut self, granularity: TaskGranularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_log_progress(mut self, log_progress: bool) -> Self {
        self.log_progress = log_progress;
        self
    }

    #[inline]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    #[inline]
    pub fn granularity(&self) -> TaskGranularity {
        self.granularity
    }

    /// Counts the solutions of `problem`.
    pub fn solve(&self, problem: &Problem) -> Result<u64> {
        Ok(self.search(problem, false)?.count)
    }

    /// Returns every solution of `problem`, in no particular order.
    pub fn solve_and_get(&self, problem: &Problem) -> Result<Vec<Solution>> {
        Ok(self.search(problem, true)?.solutions)
    }

    /// Counts the solutions of `problem` and reports how the search went.
    pub fn solve_with_statistics(&self, problem: &Problem) -> Result<(u64, SearchStatistics)> {
        let outcome = self.search(problem, false)?;
        Ok((outcome.count, outcome.statistics))
    }

    fn search(&self, problem: &Problem, collect: bool) -> Result<SearchOutcome> {
        info!(
            event = "solve_start",
            size = %problem.size(),
            pieces = problem.piece_count(),
            workers = self.worker_count,
            granularity = ?self.granularity,
        );

        if problem.is_degenerate() {
            debug!(
                event = "degenerate_problem",
                pieces = problem.piece_count(),
                squares = problem.size().positions(),
            );
            info!(event = "solve_end", solutions = 0u64, tasks = 0u64);
            return Ok(SearchOutcome {
                count: 0,
                solutions: Vec::new(),
                statistics: SearchStatistics::default(),
            });
        }

        let outcome = Search::run(
            &self.pool,
            problem,
            self.granularity,
            collect,
            self.log_progress,
        )?;

        info!(
            event = "solve_end",
            solutions = outcome.count,
            tasks = outcome.statistics.tasks_submitted,
            nodes_expanded = outcome.statistics.nodes_expanded,
            nodes_pruned = outcome.statistics.nodes_pruned,
            duration_ms = outcome.statistics.duration.as_millis() as u64,
        );
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
