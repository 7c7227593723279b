//! CLI error types

use lottery_core::LotteryError;
use lottery_sim::{RunError, SeedError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `lotteries` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A single lottery failed to parse or validate
    #[error(transparent)]
    Lottery(#[from] LotteryError),

    /// A comparison run was rejected
    #[error(transparent)]
    Run(#[from] RunError),

    /// Invalid seed
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// The `check` command found a problem
    #[error("Self-check failed: {0}")]
    SelfCheck(String),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CliError {
    /// User-facing messages, one per problem
    pub fn messages(&self) -> Vec<String> {
        match self {
            CliError::Lottery(err) => err.messages(),
            CliError::Run(err) => err.messages(),
            other => vec![other.to_string()],
        }
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
