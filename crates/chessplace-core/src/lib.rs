//! ChessPlace Core - Board model for peaceable piece placement
//!
//! This crate provides the building blocks the search engine works on:
//! - Board geometry (sizes, positions, drawing)
//! - Piece kinds with their threat footprints
//! - Immutable board states used for pruning
//! - Problems and their solutions

pub mod bitset;
pub mod error;
pub mod geometry;
pub mod piece;
pub mod problem;
pub mod solution;
pub mod state;

pub use bitset::BitSet;
pub use error::{ChessPlaceError, Result};
pub use geometry::{Position, Positions, Size};
pub use piece::{Offset, PieceKind, StepMode};
pub use problem::{Problem, ProblemBuilder};
pub use solution::Solution;
pub use state::{Available, BoardState, RegularState};
