//! Thread-safe accumulation of search results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use chessplace_core::{Result, Solution};

use crate::step::Step;

/// Collects the solutions found by concurrent search tasks.
///
/// The count is always kept. The solution list only exists when the caller
/// asked for solutions, so counting runs never build boards.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    count: AtomicU64,
    solutions: Option<Mutex<Vec<Solution>>>,
}

impl ResultAggregator {
    /// An aggregator that only counts.
    pub fn counting() -> Self {
        Self::default()
    }

    /// An aggregator that counts and keeps every solution.
    pub fn collecting() -> Self {
        Self {
            count: AtomicU64::new(0),
            solutions: Some(Mutex::new(Vec::new())),
        }
    }

    #[inline]
    pub fn is_collecting(&self) -> bool {
        self.solutions.is_some()
    }

    /// Records a terminal step.
    pub fn record(&self, step: &Step) -> Result<()> {
        if let Some(solutions) = &self.solutions {
            let solution = step.solution()?;
            solutions
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(solution);
        }
        self.count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Moves the collected solutions out, leaving the list empty.
    pub fn take_solutions(&self) -> Vec<Solution> {
        match &self.solutions {
            Some(solutions) => {
                std::mem::take(&mut *solutions.lock().unwrap_or_else(PoisonError::into_inner))
            }
            None => Vec::new(),
        }
    }
}
