//! ChessPlace - Peaceable chess piece placement in Rust
//!
//! Counts or lists every way to put a set of chess pieces on a rectangular
//! board so that no piece attacks another. The search runs on a fixed-size
//! worker pool.
//!
//! # Example
//!
//! ```rust
//! use chessplace::prelude::*;
//!
//! let problem = Problem::builder(Size::new(3, 3).unwrap())
//!     .add_pieces(PieceKind::King, 2)
//!     .add_pieces(PieceKind::Rook, 1)
//!     .build();
//!
//! assert_eq!(chessplace::solve(&problem, 2).unwrap(), 4);
//!
//! for solution in chessplace::solve_and_get(&problem, 2).unwrap() {
//!     println!("{}", solution);
//! }
//! ```

// Board model
pub use chessplace_core::{
    BitSet, BoardState, ChessPlaceError, Offset, PieceKind, Position, Problem, ProblemBuilder,
    Result, Size, Solution, StepMode,
};

// Configuration
pub use chessplace_config::{ConfigError, ProblemConfig, SolverConfig, WorkerCount};

// Search engine
pub use chessplace_solver::{SearchStatistics, Solver, Step, TaskGranularity};

#[cfg(feature = "console")]
pub mod console;

/// Counts the solutions of `problem` using `worker_count` threads.
///
/// # Errors
///
/// Fails with [`ChessPlaceError::InvalidWorkerCount`] when `worker_count`
/// is zero. No search is started in that case.
pub fn solve(problem: &Problem, worker_count: usize) -> Result<u64> {
    Solver::new(worker_count)?.solve(problem)
}

/// Returns every solution of `problem`, found with `worker_count` threads.
pub fn solve_and_get(problem: &Problem, worker_count: usize) -> Result<Vec<Solution>> {
    Solver::new(worker_count)?.solve_and_get(problem)
}

pub mod prelude {
    pub use super::{PieceKind, Position, Problem, Size, Solution};
    pub use super::{SearchStatistics, Solver, SolverConfig, TaskGranularity};
    pub use super::ChessPlaceError;
}
