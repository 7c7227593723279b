//! Inverse-CDF sampling over a small discrete distribution.
//!
//! Lotteries have at most 20 outcomes, so a linear scan is used.

/// Index of the first outcome whose cumulative probability is `>= u`.
///
/// Falls back to the last outcome when floating-point drift leaves the final
/// cumulative value below `u`. `cumulative` must be non-empty.
///
/// # Examples
///
/// ```rust
/// use lottery_sim::sampler::select_index;
///
/// let cumulative = [0.25, 0.5, 1.0];
/// assert_eq!(select_index(0.1, &cumulative), 0);
/// assert_eq!(select_index(0.25, &cumulative), 0);
/// assert_eq!(select_index(0.26, &cumulative), 1);
/// assert_eq!(select_index(0.99, &cumulative), 2);
/// ```
#[inline]
pub fn select_index(u: f64, cumulative: &[f64]) -> usize {
    debug_assert!(!cumulative.is_empty());
    cumulative
        .iter()
        .position(|&c| u <= c)
        .unwrap_or(cumulative.len().saturating_sub(1))
}

/// Label of the outcome selected by `u`.
///
/// `labels` runs parallel to `cumulative`.
#[inline]
pub fn select_outcome<'a>(u: f64, cumulative: &[f64], labels: &'a [String]) -> &'a str {
    &labels[select_index(u, cumulative)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["A".into(), "B".into(), "C".into()]
    }

    #[test]
    fn test_bucket_boundaries_are_inclusive() {
        let cumulative = [0.3, 0.6, 1.0];
        assert_eq!(select_outcome(0.0, &cumulative, &labels()), "A");
        assert_eq!(select_outcome(0.3, &cumulative, &labels()), "A");
        assert_eq!(select_outcome(0.3000001, &cumulative, &labels()), "B");
        assert_eq!(select_outcome(0.6, &cumulative, &labels()), "B");
        assert_eq!(select_outcome(0.61, &cumulative, &labels()), "C");
    }

    #[test]
    fn test_drift_falls_back_to_last() {
        let cumulative = [0.3, 0.6, 0.9999999999];
        assert_eq!(select_outcome(0.99999999995, &cumulative, &labels()), "C");
    }

    #[test]
    fn test_zero_probability_outcome_is_skipped() {
        // B has probability zero: its bucket is (0.5, 0.5].
        let cumulative = [0.5, 0.5, 1.0];
        assert_eq!(select_index(0.5, &cumulative), 0);
        assert_eq!(select_index(0.5000001, &cumulative), 2);
    }

    #[test]
    fn test_single_outcome() {
        assert_eq!(select_index(0.75, &[1.0]), 0);
    }
}
