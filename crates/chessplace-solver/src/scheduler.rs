//! Parallel task scheduling for the placement search.
//!
//! Every unit of work is a non-terminal [`Step`] run on the solver's rayon
//! pool. Tasks may submit further tasks, so the task graph grows while the
//! search runs. Completion is tracked with an outstanding-task counter:
//! it is incremented before a task reaches the pool and decremented when
//! the task finishes, and the caller sleeps on a condvar until it drops to
//! zero.
//!
//! The first failing task (an error or a panic) aborts the search. Tasks
//! still queued at that point finish without doing any work.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use chessplace_config::TaskGranularity;
use chessplace_core::{ChessPlaceError, Problem, Result, Solution};
use rayon::ThreadPool;
use tracing::{info, trace, warn};

use crate::aggregator::ResultAggregator;
use crate::statistics::{SearchStatistics, StatisticsCollector};
use crate::step::Step;

const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

/// What a finished search hands back to the solver.
#[derive(Debug)]
pub(crate) struct SearchOutcome {
    pub count: u64,
    pub solutions: Vec<Solution>,
    pub statistics: SearchStatistics,
}

/// State shared by all tasks of one search.
#[derive(Debug)]
pub(crate) struct Search {
    granularity: TaskGranularity,
    log_progress: bool,
    pending: Mutex<usize>,
    idle: Condvar,
    aborted: AtomicBool,
    failure: Mutex<Option<ChessPlaceError>>,
    aggregator: ResultAggregator,
    stats: StatisticsCollector,
    last_progress: Mutex<Instant>,
    #[cfg(test)]
    panic_at_depth: Option<usize>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "task panicked".to_string()
    }
}

impl Search {
    pub(crate) fn new(granularity: TaskGranularity, collect: bool, log_progress: bool) -> Self {
        Self {
            granularity,
            log_progress,
            pending: Mutex::new(0),
            idle: Condvar::new(),
            aborted: AtomicBool::new(false),
            failure: Mutex::new(None),
            aggregator: if collect {
                ResultAggregator::collecting()
            } else {
                ResultAggregator::counting()
            },
            stats: StatisticsCollector::new(),
            last_progress: Mutex::new(Instant::now()),
            #[cfg(test)]
            panic_at_depth: None,
        }
    }

    /// Runs the search for `problem` on `pool` and blocks until it is done.
    ///
    /// The problem must not be degenerate.
    pub(crate) fn run(
        pool: &ThreadPool,
        problem: &Problem,
        granularity: TaskGranularity,
        collect: bool,
        log_progress: bool,
    ) -> Result<SearchOutcome> {
        let search = Arc::new(Search::new(granularity, collect, log_progress));
        Search::start(&search, pool, problem);
        search.wait()
    }

    /// Submits the root step of `problem` to `pool`.
    fn start(search: &Arc<Search>, pool: &ThreadPool, problem: &Problem) {
        let root = Step::root(problem);
        search.begin_task(&root);
        let task = Arc::clone(search);
        pool.spawn(move || Search::execute(task, root, true));
    }

    fn begin_task(&self, step: &Step) {
        *lock(&self.pending) += 1;
        self.stats.record_task_submitted();
        trace!(event = "task_submitted", depth = step.depth());
    }

    fn end_task(&self) {
        self.stats.record_task_completed();
        let mut pending = lock(&self.pending);
        *pending -= 1;
        if *pending == 0 {
            self.idle.notify_all();
        }
    }

    /// Submits `step` as a new task on the current worker's pool.
    fn submit(search: &Arc<Search>, step: Step) {
        search.begin_task(&step);
        let task = Arc::clone(search);
        rayon::spawn(move || Search::execute(task, step, false));
    }

    fn execute(search: Arc<Search>, step: Step, root: bool) {
        if !search.is_aborted() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                Search::process(&search, step, root)
            }));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(error)) => search.fail(error),
                Err(payload) => search.fail(ChessPlaceError::TaskFailed(panic_message(payload))),
            }
        }
        search.report_progress();
        search.end_task();
    }

    fn process(search: &Arc<Search>, step: Step, root: bool) -> Result<()> {
        let inline = search.granularity == TaskGranularity::PerBranch && !root;
        if inline {
            return search.explore(step);
        }
        for child in search.expand(&step)? {
            if child.is_solution() {
                search.aggregator.record(&child)?;
            } else {
                Search::submit(search, child);
            }
        }
        Ok(())
    }

    /// Depth-first exploration of a whole subtree on the calling worker.
    fn explore(&self, step: Step) -> Result<()> {
        if self.is_aborted() {
            return Ok(());
        }
        for child in self.expand(&step)? {
            if child.is_solution() {
                self.aggregator.record(&child)?;
            } else {
                self.explore(child)?;
            }
        }
        Ok(())
    }

    fn expand(&self, step: &Step) -> Result<Vec<Step>> {
        #[cfg(test)]
        if self.panic_at_depth == Some(step.depth()) {
            panic!("failure injected at depth {}", step.depth());
        }
        if step.lacks_room() {
            self.stats.record_pruned();
            return Ok(Vec::new());
        }
        let children = step.expand()?;
        self.stats.record_expanded();
        Ok(children)
    }

    #[inline]
    fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Acquire)
    }

    fn fail(&self, error: ChessPlaceError) {
        warn!(event = "task_failed", error = %error);
        self.aborted.store(true, Ordering::Release);
        let mut failure = lock(&self.failure);
        if failure.is_none() {
            *failure = Some(error);
        }
    }

    fn report_progress(&self) {
        if !self.log_progress {
            return;
        }
        // Skip rather than wait when another worker is reporting.
        let Ok(mut last) = self.last_progress.try_lock() else {
            return;
        };
        if last.elapsed() < PROGRESS_INTERVAL {
            return;
        }
        *last = Instant::now();
        info!(
            event = "progress",
            tasks_completed = self.stats.current_tasks_completed(),
            solutions = self.aggregator.count(),
        );
    }

    fn wait(&self) -> Result<SearchOutcome> {
        let mut pending = lock(&self.pending);
        while *pending > 0 {
            pending = self
                .idle
                .wait(pending)
                .unwrap_or_else(PoisonError::into_inner);
        }
        drop(pending);

        if let Some(error) = lock(&self.failure).take() {
            return Err(error);
        }
        let count = self.aggregator.count();
        Ok(SearchOutcome {
            count,
            solutions: self.aggregator.take_solutions(),
            statistics: self.stats.snapshot(count),
        })
    }
}
