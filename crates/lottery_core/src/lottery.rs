//! Validated discrete lotteries.
//!
//! A [`Lottery`] is an ordered list of outcomes, each with a payoff and a
//! probability. Order matters: it fixes the outcome labels (`A`, `B`, ...)
//! and the cumulative buckets used for sampling.

use serde::Serialize;

use crate::error::{ListField, LotteryError, ValidationIssue};
use crate::parsing::parse_number_list;

/// Maximum number of outcomes in a lottery.
pub const MAX_OUTCOMES: usize = 20;

/// Default tolerance on `|Σp - 1|`.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// A validated discrete lottery.
///
/// Can only be obtained through validation, so holding one guarantees:
/// - between 1 and [`MAX_OUTCOMES`] outcomes
/// - as many payoffs as probabilities
/// - every probability finite and in [0, 1]
/// - probabilities summing to 1 within tolerance
///
/// # Examples
/// ```
/// use lottery_core::Lottery;
///
/// let lottery = Lottery::new(vec![20.0, 40.0, 0.0], vec![0.25, 0.25, 0.5]).unwrap();
/// assert_eq!(lottery.len(), 3);
/// assert_eq!(lottery.labels(), vec!["A", "B", "C"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lottery {
    values: Vec<f64>,
    probabilities: Vec<f64>,
}

impl Lottery {
    /// Validates payoffs and probabilities with the default tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`LotteryError`] listing every violated rule.
    pub fn new(values: Vec<f64>, probabilities: Vec<f64>) -> Result<Self, LotteryError> {
        Self::with_tolerance(values, probabilities, PROBABILITY_TOLERANCE)
    }

    /// Validates payoffs and probabilities with an explicit sum tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`LotteryError`] listing every violated rule.
    pub fn with_tolerance(
        values: Vec<f64>,
        probabilities: Vec<f64>,
        tolerance: f64,
    ) -> Result<Self, LotteryError> {
        validate_lottery_with_tolerance(&values, &probabilities, tolerance)?;
        Ok(Self {
            values,
            probabilities,
        })
    }

    /// Payoff of each outcome.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Probability of each outcome.
    #[inline]
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Number of outcomes.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a validated lottery.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Outcome labels by position.
    pub fn labels(&self) -> Vec<String> {
        outcome_labels(self.len())
    }
}

/// Labels `A`, `B`, `C`, ... for the first `n` outcomes.
///
/// At most 26 labels are produced; validated lotteries never need more than
/// [`MAX_OUTCOMES`].
pub fn outcome_labels(n: usize) -> Vec<String> {
    ('A'..='Z').take(n).map(String::from).collect()
}

/// Validates a lottery with the default tolerance.
///
/// # Errors
///
/// Returns [`LotteryError`] listing every violated rule.
pub fn validate_lottery(values: &[f64], probabilities: &[f64]) -> Result<(), LotteryError> {
    validate_lottery_with_tolerance(values, probabilities, PROBABILITY_TOLERANCE)
}

/// Validates a lottery, collecting all issues rather than the first.
///
/// Issues are reported in a fixed order: emptiness, length mismatch, outcome
/// count, per-position probability problems, then the sum check. Non-finite
/// probabilities are left out of the sum.
///
/// # Errors
///
/// Returns [`LotteryError`] listing every violated rule.
pub fn validate_lottery_with_tolerance(
    values: &[f64],
    probabilities: &[f64],
    tolerance: f64,
) -> Result<(), LotteryError> {
    let mut issues = Vec::new();

    if values.is_empty() || probabilities.is_empty() {
        issues.push(ValidationIssue::Empty);
    }

    if values.len() != probabilities.len() {
        issues.push(ValidationIssue::LengthMismatch {
            values: values.len(),
            probabilities: probabilities.len(),
        });
    }

    if values.len() > MAX_OUTCOMES {
        issues.push(ValidationIssue::TooManyOutcomes {
            count: values.len(),
            max: MAX_OUTCOMES,
        });
    }

    for (i, &p) in probabilities.iter().enumerate() {
        if !p.is_finite() {
            issues.push(ValidationIssue::NonFiniteProbability { position: i + 1 });
        } else if !(0.0..=1.0).contains(&p) {
            issues.push(ValidationIssue::ProbabilityOutOfRange {
                position: i + 1,
                value: p,
            });
        }
    }

    let sum: f64 = probabilities.iter().filter(|p| p.is_finite()).sum();
    if (sum - 1.0).abs() > tolerance {
        issues.push(ValidationIssue::SumNotOne { sum });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(LotteryError::new(issues))
    }
}

/// Parses both input lists and validates the result.
///
/// Parse failures of both lists are reported together; validation only runs
/// once both lists parse.
///
/// # Errors
///
/// Returns [`LotteryError`] with parse issues, or with validation issues.
///
/// # Examples
/// ```
/// use lottery_core::parse_and_validate_lottery;
///
/// let lottery = parse_and_validate_lottery("20; 40; 0", "0.25; 0.25; 0.5").unwrap();
/// assert_eq!(lottery.values(), &[20.0, 40.0, 0.0]);
///
/// let err = parse_and_validate_lottery("", "0,5").unwrap_err();
/// assert_eq!(err.issues().len(), 2);
/// ```
pub fn parse_and_validate_lottery(
    values_text: &str,
    probabilities_text: &str,
) -> Result<Lottery, LotteryError> {
    parse_and_validate_lottery_with_tolerance(
        values_text,
        probabilities_text,
        PROBABILITY_TOLERANCE,
    )
}

/// [`parse_and_validate_lottery`] with an explicit sum tolerance.
///
/// # Errors
///
/// Returns [`LotteryError`] with parse issues, or with validation issues.
pub fn parse_and_validate_lottery_with_tolerance(
    values_text: &str,
    probabilities_text: &str,
    tolerance: f64,
) -> Result<Lottery, LotteryError> {
    let values = parse_number_list(values_text);
    let probabilities = parse_number_list(probabilities_text);

    match (values, probabilities) {
        (Ok(values), Ok(probabilities)) => {
            Lottery::with_tolerance(values, probabilities, tolerance)
        }
        (values, probabilities) => {
            let mut issues = Vec::new();
            if let Err(source) = values {
                issues.push(ValidationIssue::Parse {
                    field: ListField::Payoffs,
                    source,
                });
            }
            if let Err(source) = probabilities {
                issues.push(ValidationIssue::Parse {
                    field: ListField::Probabilities,
                    source,
                });
            }
            Err(LotteryError::new(issues))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::ParseError;

    #[test]
    fn test_accepts_valid_lottery() {
        assert!(validate_lottery(&[20.0, 40.0, 0.0], &[0.25, 0.25, 0.5]).is_ok());
        assert!(validate_lottery(&[5.0], &[1.0]).is_ok());
    }

    #[test]
    fn test_rejects_sum_above_one() {
        let err = validate_lottery(&[1.0, 2.0], &[0.5, 0.6]).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert!(err.messages()[0].contains("must sum to 1"));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = validate_lottery(&[1.0, 2.0, 3.0], &[0.5, 0.5]).unwrap_err();
        assert_eq!(
            err.issues(),
            &[ValidationIssue::LengthMismatch {
                values: 3,
                probabilities: 2
            }]
        );
    }

    #[test]
    fn test_empty_reports_sum_too() {
        let err = validate_lottery(&[], &[]).unwrap_err();
        assert_eq!(
            err.issues(),
            &[
                ValidationIssue::Empty,
                ValidationIssue::SumNotOne { sum: 0.0 }
            ]
        );
    }

    #[test]
    fn test_collects_all_issues_in_order() {
        let values = vec![1.0; 21];
        let mut probabilities = vec![0.0; 20];
        probabilities[0] = f64::NAN;
        probabilities[1] = -0.5;
        probabilities[2] = 1.5;

        let err = validate_lottery(&values, &probabilities).unwrap_err();
        let issues = err.issues();

        assert_eq!(
            issues[0],
            ValidationIssue::LengthMismatch {
                values: 21,
                probabilities: 20
            }
        );
        assert_eq!(
            issues[1],
            ValidationIssue::TooManyOutcomes {
                count: 21,
                max: MAX_OUTCOMES
            }
        );
        assert_eq!(issues[2], ValidationIssue::NonFiniteProbability { position: 1 });
        assert_eq!(
            issues[3],
            ValidationIssue::ProbabilityOutOfRange {
                position: 2,
                value: -0.5
            }
        );
        assert_eq!(
            issues[4],
            ValidationIssue::ProbabilityOutOfRange {
                position: 3,
                value: 1.5
            }
        );
        // NaN excluded from the sum: -0.5 + 1.5 = 1.0, so no sum issue.
        assert_eq!(issues.len(), 5);
    }

    #[test]
    fn test_max_outcomes_boundary() {
        let p = 1.0 / MAX_OUTCOMES as f64;
        let ok = validate_lottery(&vec![1.0; MAX_OUTCOMES], &vec![p; MAX_OUTCOMES]);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_tolerance_is_configurable() {
        let probs = [0.5, 0.5 + 1e-6];
        assert!(validate_lottery(&[1.0, 2.0], &probs).is_err());
        assert!(validate_lottery_with_tolerance(&[1.0, 2.0], &probs, 1e-5).is_ok());
    }

    #[test]
    fn test_parse_and_validate_reports_both_parse_errors() {
        let err = parse_and_validate_lottery("  ", "1; x").unwrap_err();
        assert_eq!(
            err.issues(),
            &[
                ValidationIssue::Parse {
                    field: ListField::Payoffs,
                    source: ParseError::Empty,
                },
                ValidationIssue::Parse {
                    field: ListField::Probabilities,
                    source: ParseError::InvalidNumber("x".to_string()),
                },
            ]
        );
        assert_eq!(err.messages()[0], "Payoffs: Empty list.");
    }

    #[test]
    fn test_parse_and_validate_runs_validation() {
        let err = parse_and_validate_lottery("1; 2", "0.3; 0.3").unwrap_err();
        assert!(matches!(err.issues()[0], ValidationIssue::SumNotOne { .. }));

        let lottery = parse_and_validate_lottery("120; 140; -100", "0.3; 0.3; 0.4").unwrap();
        assert_eq!(lottery.probabilities(), &[0.3, 0.3, 0.4]);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(outcome_labels(0), Vec::<String>::new());
        assert_eq!(outcome_labels(3), vec!["A", "B", "C"]);
        assert_eq!(outcome_labels(MAX_OUTCOMES).last().unwrap(), "T");
    }
}
