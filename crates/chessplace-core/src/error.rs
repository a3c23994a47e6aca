//! Error types for ChessPlace

use thiserror::Error;

use crate::geometry::Size;

/// Main error type for ChessPlace operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessPlaceError {
    /// Board dimensions must both be positive
    #[error("Invalid board size: {rows} row(s) by {columns} column(s)")]
    InvalidSize { rows: usize, columns: usize },

    /// Index or coordinates outside the board
    #[error("Position out of range: {0}")]
    PositionOutOfRange(String),

    /// A solver needs at least one worker
    #[error("Invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(usize),

    /// Two values built for different boards were combined
    #[error("Size mismatch: expected {expected}, found {actual}")]
    SizeMismatch { expected: Size, actual: Size },

    /// Operation only defined for square boards
    #[error("Board {0} is not square")]
    NotSquare(Size),

    /// Invalid operation for the current search node state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// A search task failed; the search was aborted
    #[error("Search task failed: {0}")]
    TaskFailed(String),
}

/// Result type alias for ChessPlace operations
pub type Result<T> = std::result::Result<T, ChessPlaceError>;
