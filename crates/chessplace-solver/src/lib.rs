//! ChessPlace Solver Engine
//!
//! This crate provides the parallel placement search:
//! - Search tree nodes with pruning and duplicate suppression
//! - Task scheduling on a fixed-size rayon pool
//! - Result aggregation and search statistics
//! - The [`Solver`] entry point

pub mod aggregator;
mod scheduler;
pub mod solver;
pub mod statistics;
pub mod step;

pub use aggregator::ResultAggregator;
pub use chessplace_config::TaskGranularity;
pub use solver::Solver;
pub use statistics::{SearchStatistics, StatisticsCollector};
pub use step::Step;
