//! Error types for lottery parsing and validation.
//!
//! Validation never stops at the first problem: every violated rule becomes a
//! [`ValidationIssue`], and all of them are returned together inside a
//! [`LotteryError`] so the caller can show them at once.

use std::fmt;
use thiserror::Error;

use crate::parsing::ParseError;

/// Which of the two input lists a parse failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    /// The payoff list.
    Payoffs,
    /// The probability list.
    Probabilities,
}

impl fmt::Display for ListField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListField::Payoffs => write!(f, "Payoffs"),
            ListField::Probabilities => write!(f, "Probabilities"),
        }
    }
}

/// A single violated lottery rule.
///
/// Positions are 1-based, matching what a user sees in the input list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    /// One of the input lists could not be parsed.
    #[error("{field}: {source}")]
    Parse {
        /// List that failed.
        field: ListField,
        /// Underlying parse failure.
        source: ParseError,
    },

    /// Payoffs or probabilities are empty.
    #[error("Payoffs and probabilities must not be empty.")]
    Empty,

    /// Payoffs and probabilities differ in length.
    #[error("Payoffs and probabilities must have the same length ({values} vs {probabilities}).")]
    LengthMismatch {
        /// Number of payoffs.
        values: usize,
        /// Number of probabilities.
        probabilities: usize,
    },

    /// More outcomes than allowed.
    #[error("Maximum number of outcomes is {max} (got {count}).")]
    TooManyOutcomes {
        /// Number of outcomes supplied.
        count: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// Probability is NaN or infinite.
    #[error("Probability at position {position} is not a valid number.")]
    NonFiniteProbability {
        /// 1-based position in the list.
        position: usize,
    },

    /// Probability outside [0, 1].
    #[error("Probability at position {position} must be between 0 and 1 (got {value}).")]
    ProbabilityOutOfRange {
        /// 1-based position in the list.
        position: usize,
        /// Offending value.
        value: f64,
    },

    /// Finite probabilities do not sum to 1 within tolerance.
    #[error("Probabilities must sum to 1 (currently {sum}).")]
    SumNotOne {
        /// Sum of the finite probabilities.
        sum: f64,
    },
}

/// Aggregated validation failure for a lottery.
///
/// # Examples
/// ```
/// use lottery_core::{validate_lottery, ValidationIssue};
///
/// let err = validate_lottery(&[1.0, 2.0], &[0.5, 0.6]).unwrap_err();
/// assert!(matches!(err.issues()[0], ValidationIssue::SumNotOne { .. }));
/// assert!(err.to_string().contains("must sum to 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "Invalid lottery: {}",
    .issues.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
)]
pub struct LotteryError {
    issues: Vec<ValidationIssue>,
}

impl LotteryError {
    /// Wraps a non-empty list of issues.
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }

    /// Issues in the order they were detected.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// User-facing message for every issue, in order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}
