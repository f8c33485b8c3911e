//! Error types for configuration loading and simulation invariants.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a `GameConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Invariant violations inside the simulation.
///
/// Losing the game is not an error; it is reported as `StepStatus::Lost`.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("snake must have at least 2 parts, found {len}")]
    SnakeTooShort { len: usize },
    #[error("no snake in the entity store")]
    MissingSnake,
    #[error("apple position ({x}, {z}) is outside the board")]
    AppleOutOfBounds { x: f64, z: f64 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
