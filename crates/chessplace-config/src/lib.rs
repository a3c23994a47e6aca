//! Configuration system for ChessPlace.
//!
//! Solver settings and problem definitions can be loaded from TOML or YAML
//! so that a front end never has to hard-code them.
//!
//! # Examples
//!
//! ```
//! use chessplace_config::{ProblemConfig, SolverConfig, TaskGranularity, WorkerCount};
//!
//! let solver = SolverConfig::from_toml_str(r#"
//!     worker_count = { count = 4 }
//!     granularity = "per_branch"
//! "#).unwrap();
//! assert_eq!(solver.worker_count, WorkerCount::Count(4));
//! assert_eq!(solver.granularity, TaskGranularity::PerBranch);
//!
//! let problem = ProblemConfig::from_toml_str(r#"
//!     rows = 8
//!     columns = 8
//!     queens = 8
//! "#).unwrap();
//! assert_eq!(problem.to_problem().unwrap().piece_count(), 8);
//! ```

use std::num::NonZeroUsize;
use std::path::Path;

use chessplace_core::{PieceKind, Problem, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Number of worker threads.
    #[serde(default)]
    pub worker_count: WorkerCount,

    /// How search work is split into tasks.
    #[serde(default)]
    pub granularity: TaskGranularity,

    /// Log an info-level `progress` event, at most once per second while a
    /// search runs, with the tasks completed and solutions found so far.
    #[serde(default)]
    pub log_progress: bool,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn with_worker_count(mut self, count: usize) -> Self {
        self.worker_count = WorkerCount::Count(count);
        self
    }

    pub fn with_granularity(mut self, granularity: TaskGranularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_log_progress(mut self, log_progress: bool) -> Self {
        self.log_progress = log_progress;
        self
    }
}

/// Worker thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerCount {
    /// One worker per available CPU.
    #[default]
    Auto,

    /// Specific number of workers.
    Count(usize),
}

impl WorkerCount {
    /// Resolves to a concrete count. `Count(0)` is returned as is and
    /// rejected by the solver.
    pub fn resolve(&self) -> usize {
        match self {
            WorkerCount::Auto => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            WorkerCount::Count(n) => *n,
        }
    }
}

/// Unit of work handed to the worker pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskGranularity {
    /// One task per non-terminal search node.
    #[default]
    PerNode,

    /// One task per branch below the root; each branch is explored
    /// depth-first on a single worker.
    PerBranch,
}

/// A placement problem as read from a file.
///
/// Missing piece counts default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProblemConfig {
    pub rows: usize,
    pub columns: usize,
    #[serde(default)]
    pub kings: usize,
    #[serde(default)]
    pub queens: usize,
    #[serde(default)]
    pub bishops: usize,
    #[serde(default)]
    pub rooks: usize,
    #[serde(default)]
    pub knights: usize,
}

impl ProblemConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Builds the core problem, validating the board size.
    pub fn to_problem(&self) -> Result<Problem, ConfigError> {
        let size = Size::new(self.rows, self.columns)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(Problem::builder(size)
            .add_pieces(PieceKind::King, self.kings)
            .add_pieces(PieceKind::Queen, self.queens)
            .add_pieces(PieceKind::Bishop, self.bishops)
            .add_pieces(PieceKind::Rook, self.rooks)
            .add_pieces(PieceKind::Knight, self.knights)
            .build())
    }
}
