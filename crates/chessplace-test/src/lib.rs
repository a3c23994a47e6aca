//! Shared test fixtures for ChessPlace crates.
//!
//! - [`problems`] - Builders for common problem shapes
//! - [`known`] - Problems with a known number of solutions
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! chessplace-test = { workspace = true }
//! ```
//!
//! Then iterate the fixtures:
//!
//! ```ignore
//! use chessplace_test::known::KNOWN_PROBLEMS;
//!
//! for fixture in KNOWN_PROBLEMS {
//!     assert_eq!(solver.solve(&fixture.problem()).unwrap(), fixture.expected);
//! }
//! ```

pub mod known;
pub mod problems;

pub use known::{KnownProblem, KNOWN_PROBLEMS, SEVEN_BY_SEVEN};
pub use problems::{mixed, n_queens, single_piece};
