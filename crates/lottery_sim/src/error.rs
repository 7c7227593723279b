//! Error types for simulation configuration and runs.

use thiserror::Error;

use crate::seed::SeedError;

/// Invalid simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Ticket ceiling outside `[1, MAX_TICKETS]`.
    #[error("Invalid ticket count {count}: must be in range [1, {max}]")]
    InvalidTicketCount {
        /// Requested ceiling.
        count: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Failure of a comparison run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    /// One or both lotteries failed to parse or validate.
    ///
    /// Messages are prefixed with the lottery they belong to.
    #[error("{}", .0.join(" "))]
    Lotteries(Vec<String>),

    /// The manual seed is invalid.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// The run configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RunError {
    /// User-facing messages, one per problem.
    pub fn messages(&self) -> Vec<String> {
        match self {
            RunError::Lotteries(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}
