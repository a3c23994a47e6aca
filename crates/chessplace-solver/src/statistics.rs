//! Search statistics collection and reporting.
//!
//! Counters are updated concurrently by search tasks and frozen into a
//! [`SearchStatistics`] value when the search ends.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Statistics for a finished search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Wall time from the start of the search until all tasks finished.
    pub duration: Duration,
    /// Tasks handed to the worker pool.
    pub tasks_submitted: u64,
    /// Tasks that finished, including ones skipped after a failure.
    pub tasks_completed: u64,
    /// Nodes whose children were generated.
    pub nodes_expanded: u64,
    /// Nodes abandoned because too few squares were left.
    pub nodes_pruned: u64,
    /// Solutions found.
    pub solution_count: u64,
}

impl SearchStatistics {
    /// Returns the expansion rate in nodes per second.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.nodes_expanded as f64 / secs
        } else {
            0.0
        }
    }
}

/// Thread-safe statistics collector shared by the tasks of one search.
#[derive(Debug)]
pub struct StatisticsCollector {
    start_time: Instant,
    tasks_submitted: AtomicU64,
    tasks_completed: AtomicU64,
    nodes_expanded: AtomicU64,
    nodes_pruned: AtomicU64,
}

impl StatisticsCollector {
    /// Creates a new collector. The start time is recorded now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            tasks_submitted: AtomicU64::new(0),
            tasks_completed: AtomicU64::new(0),
            nodes_expanded: AtomicU64::new(0),
            nodes_pruned: AtomicU64::new(0),
        }
    }

    pub fn record_task_submitted(&self) {
        self.tasks_submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_task_completed(&self) {
        self.tasks_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_expanded(&self) {
        self.nodes_expanded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_pruned(&self) {
        self.nodes_pruned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn current_tasks_completed(&self) -> u64 {
        self.tasks_completed.load(Ordering::Relaxed)
    }

    /// Freezes the counters. `solution_count` comes from the aggregator.
    pub fn snapshot(&self, solution_count: u64) -> SearchStatistics {
        SearchStatistics {
            duration: self.elapsed(),
            tasks_submitted: self.tasks_submitted.load(Ordering::Relaxed),
            tasks_completed: self.tasks_completed.load(Ordering::Relaxed),
            nodes_expanded: self.nodes_expanded.load(Ordering::Relaxed),
            nodes_pruned: self.nodes_pruned.load(Ordering::Relaxed),
            solution_count,
        }
    }
}

impl Default for StatisticsCollector {
    fn default() -> Self {
        Self::new()
    }
}
