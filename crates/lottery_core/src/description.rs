//! Theoretical description of a lottery.
//!
//! Moments use the population formulas: they are exact parameters of the
//! distribution, not estimates from a sample.

use serde::Serialize;

use crate::lottery::Lottery;

/// One point of the payoff distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionPoint {
    /// Payoff.
    pub value: f64,
    /// Total probability of that payoff.
    pub probability: f64,
}

/// Read-only theoretical view of a [`Lottery`].
///
/// # Examples
/// ```
/// use lottery_core::{describe_lottery, Lottery};
///
/// let lottery = Lottery::new(vec![20.0, 40.0, 0.0], vec![0.25, 0.25, 0.5]).unwrap();
/// let description = describe_lottery(&lottery);
///
/// assert_eq!(description.expected_value, 15.0);
/// assert_eq!(description.cumulative_probabilities, vec![0.25, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotteryDescription {
    /// Outcome labels by position.
    pub labels: Vec<String>,
    /// Payoffs by position.
    pub values: Vec<f64>,
    /// Probabilities by position.
    pub probabilities: Vec<f64>,
    /// Running sum of `probabilities`.
    pub cumulative_probabilities: Vec<f64>,
    /// `Σ v·p`.
    pub expected_value: f64,
    /// `sqrt(Σ p·(v - EV)²)`.
    pub std_dev: f64,
    /// Distinct payoffs in ascending order with their summed probabilities.
    pub distribution: Vec<DistributionPoint>,
}

impl LotteryDescription {
    /// Describes a validated lottery.
    pub fn new(lottery: &Lottery) -> Self {
        let values = lottery.values();
        let probabilities = lottery.probabilities();
        let ev = expected_value(values, probabilities);

        Self {
            labels: lottery.labels(),
            values: values.to_vec(),
            probabilities: probabilities.to_vec(),
            cumulative_probabilities: cumulative_probabilities(probabilities),
            expected_value: ev,
            std_dev: std_dev(values, probabilities, ev),
            distribution: grouped_distribution(values, probabilities),
        }
    }

    /// Variance, i.e. `std_dev²`.
    #[inline]
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Number of outcomes.
    #[inline]
    pub fn outcome_count(&self) -> usize {
        self.labels.len()
    }
}

/// Describes a validated lottery.
pub fn describe_lottery(lottery: &Lottery) -> LotteryDescription {
    LotteryDescription::new(lottery)
}

/// Running sum of probabilities, in the given order.
pub fn cumulative_probabilities(probabilities: &[f64]) -> Vec<f64> {
    probabilities
        .iter()
        .scan(0.0, |acc, &p| {
            *acc += p;
            Some(*acc)
        })
        .collect()
}

/// Expected payoff `Σ v·p`.
pub fn expected_value(values: &[f64], probabilities: &[f64]) -> f64 {
    values
        .iter()
        .zip(probabilities)
        .map(|(v, p)| v * p)
        .sum()
}

/// Population standard deviation around `ev`.
pub fn std_dev(values: &[f64], probabilities: &[f64], ev: f64) -> f64 {
    values
        .iter()
        .zip(probabilities)
        .map(|(v, p)| {
            let d = v - ev;
            p * d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Merges equal payoffs and sorts by payoff.
fn grouped_distribution(values: &[f64], probabilities: &[f64]) -> Vec<DistributionPoint> {
    let mut points: Vec<DistributionPoint> = Vec::with_capacity(values.len());

    for (&value, &probability) in values.iter().zip(probabilities) {
        match points.iter_mut().find(|point| point.value == value) {
            Some(point) => point.probability += probability,
            None => points.push(DistributionPoint { value, probability }),
        }
    }

    points.sort_by(|a, b| a.value.total_cmp(&b.value));
    points
}
