//! Property tests for simulation tables.
//!
//! These exercise the public API end to end: text in, description, table out.

use approx::assert_relative_eq;
use lottery_core::{describe_lottery, Lottery, LotteryDescription, MAX_OUTCOMES};
use lottery_sim::seed::{SEED_MAX, SEED_MIN};
use lottery_sim::{build_simulation_table, row_for_tickets, Seed, SimulationTable};
use proptest::prelude::*;

fn description_strategy() -> impl Strategy<Value = LotteryDescription> {
    prop::collection::vec((-500.0_f64..500.0, 0.0_f64..1.0), 1..=MAX_OUTCOMES).prop_filter_map(
        "needs positive weight",
        |pairs| {
            let total: f64 = pairs.iter().map(|(_, w)| w).sum();
            if total <= 0.0 {
                return None;
            }
            let values = pairs.iter().map(|(v, _)| *v).collect();
            let probabilities = pairs.iter().map(|(_, w)| w / total).collect();
            Lottery::new(values, probabilities)
                .ok()
                .map(|lottery| describe_lottery(&lottery))
        },
    )
}

fn seed_strategy() -> impl Strategy<Value = Seed> {
    (i64::from(SEED_MIN)..=i64::from(SEED_MAX)).prop_map(|s| Seed::new(s).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_tables_are_deterministic(
        description in description_strategy(),
        seed in seed_strategy(),
        n in 1_usize..60,
    ) {
        let a = SimulationTable::from_description(n, &description, seed);
        let b = SimulationTable::from_description(n, &description, seed);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_row_count_and_conservation(
        description in description_strategy(),
        seed in seed_strategy(),
        n in 1_usize..60,
    ) {
        let table = SimulationTable::from_description(n, &description, seed);

        prop_assert_eq!(table.len(), n);
        prop_assert_eq!(table.labels(), description.labels.as_slice());
        for (i, row) in table.rows().iter().enumerate() {
            prop_assert_eq!(row.tickets, i + 1);
            prop_assert_eq!(row.counts.len(), description.outcome_count());
            prop_assert_eq!(row.total_count(), row.tickets);
        }
    }

    #[test]
    fn test_returns_match_counts(
        description in description_strategy(),
        seed in seed_strategy(),
    ) {
        let table = SimulationTable::from_description(30, &description, seed);
        for row in table.rows() {
            let expected: f64 = row
                .counts
                .iter()
                .zip(&description.values)
                .map(|(&c, v)| c as f64 * v)
                .sum();
            prop_assert!((row.returns - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_clamped_lookup_never_fails(
        description in description_strategy(),
        seed in seed_strategy(),
        n in 1_usize..40,
        tickets in 0_usize..1000,
    ) {
        let table = SimulationTable::from_description(n, &description, seed);
        let row = row_for_tickets(&table, tickets).unwrap();
        prop_assert_eq!(row.tickets, tickets.clamp(1, n));
    }
}

#[test]
fn test_free_function_matches_table_constructor() {
    let lottery = Lottery::new(vec![120.0, 140.0, -100.0], vec![0.3, 0.3, 0.4]).unwrap();
    let d = describe_lottery(&lottery);
    let seed = Seed::new(77_777).unwrap();

    let a = build_simulation_table(
        40,
        &d.cumulative_probabilities,
        &d.labels,
        &d.values,
        d.expected_value,
        seed,
    );
    let b = SimulationTable::from_description(40, &d, seed);
    assert_eq!(a, b);
}

#[test]
fn test_large_run_converges_to_expected_value() {
    let lottery = Lottery::new(vec![20.0, 40.0, 0.0], vec![0.25, 0.25, 0.5]).unwrap();
    let d = describe_lottery(&lottery);
    let table = SimulationTable::from_description(2_000, &d, Seed::new(12_345).unwrap());

    let last = table.rows().last().unwrap();
    // Standard error at 2000 tickets is sqrt(275 / 2000) ≈ 0.37.
    assert_relative_eq!(last.mean_return, d.expected_value, epsilon = 2.0);
}

#[test]
fn test_different_seeds_give_different_tables() {
    let lottery = Lottery::new(vec![1.0, 2.0, 3.0, 4.0], vec![0.25; 4]).unwrap();
    let d = describe_lottery(&lottery);

    let a = SimulationTable::from_description(50, &d, Seed::new(10_000).unwrap());
    let b = SimulationTable::from_description(50, &d, Seed::new(10_001).unwrap());
    assert_ne!(a.rows(), b.rows());
}
