//! Simulation table construction.
//!
//! Row `t` is a fresh `t`-ticket experiment: its counts and returns cover
//! exactly `t` draws. All rows share one generator that is never reseeded,
//! so row `t` consumes draws `t(t-1)/2 + 1 ..= t(t+1)/2` of the stream.
//! Building the table therefore has to stay sequential.

use serde::Serialize;
use tracing::debug;

use lottery_core::LotteryDescription;

use crate::sampler::select_index;
use crate::seed::Seed;

/// Decimal places kept for mean return and profit.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Summary of one `tickets`-draw experiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationRow {
    /// Number of tickets drawn.
    pub tickets: usize,
    /// Occurrences per outcome, parallel to the table labels.
    pub counts: Vec<usize>,
    /// Sum of payoffs over the draws.
    pub returns: f64,
    /// `returns / tickets`, rounded.
    pub mean_return: f64,
    /// `(mean - EV) * tickets`, rounded.
    pub profit: f64,
}

impl SimulationRow {
    /// Sum of all outcome counts; always equals `tickets`.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Rows for ticket counts `1..=N`, in order.
///
/// # Examples
///
/// ```rust
/// use lottery_core::{describe_lottery, Lottery};
/// use lottery_sim::{Seed, SimulationTable};
///
/// let lottery = Lottery::new(vec![20.0, 40.0, 0.0], vec![0.25, 0.25, 0.5]).unwrap();
/// let description = describe_lottery(&lottery);
/// let seed = Seed::new(12345).unwrap();
///
/// let table = SimulationTable::from_description(100, &description, seed);
/// assert_eq!(table.len(), 100);
/// assert_eq!(table.row_for_tickets(0).unwrap().tickets, 1);
/// assert_eq!(table.row_for_tickets(500).unwrap().tickets, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationTable {
    seed: Seed,
    labels: Vec<String>,
    rows: Vec<SimulationRow>,
}

impl SimulationTable {
    /// Builds the table for a described lottery with the default precision.
    pub fn from_description(n: usize, description: &LotteryDescription, seed: Seed) -> Self {
        Self::from_description_with(n, description, seed, DISPLAY_DECIMALS)
    }

    /// Builds the table for a described lottery, rounding to `decimals`.
    pub fn from_description_with(
        n: usize,
        description: &LotteryDescription,
        seed: Seed,
        decimals: u32,
    ) -> Self {
        build_simulation_table_with(
            n,
            &description.cumulative_probabilities,
            &description.labels,
            &description.values,
            description.expected_value,
            seed,
            decimals,
        )
    }

    /// Seed the table was built from.
    #[inline]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Outcome labels, one per count column.
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// All rows, ordered by ticket count.
    #[inline]
    pub fn rows(&self) -> &[SimulationRow] {
        &self.rows
    }

    /// Number of rows (`N`).
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` only for `N = 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for `tickets`, clamped to `[1, N]`.
    ///
    /// Returns `None` only for an empty table.
    pub fn row_for_tickets(&self, tickets: usize) -> Option<&SimulationRow> {
        let n = self.rows.len();
        if n == 0 {
            return None;
        }
        self.rows.get(tickets.clamp(1, n) - 1)
    }

    /// Count of `label` in `row`, if the label belongs to this table.
    pub fn count_for(&self, row: &SimulationRow, label: &str) -> Option<usize> {
        let index = self.labels.iter().position(|l| l == label)?;
        row.counts.get(index).copied()
    }

    /// `(label, count)` pairs of `row`, in outcome order.
    pub fn counts_by_label<'a>(
        &'a self,
        row: &'a SimulationRow,
    ) -> impl Iterator<Item = (&'a str, usize)> + 'a {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(row.counts.iter().copied())
    }
}

/// Builds the simulation table with the default precision.
///
/// `cumulative`, `labels` and `values` are parallel, as produced by
/// [`lottery_core::describe_lottery`].
pub fn build_simulation_table(
    n: usize,
    cumulative: &[f64],
    labels: &[String],
    values: &[f64],
    expected_value: f64,
    seed: Seed,
) -> SimulationTable {
    build_simulation_table_with(
        n,
        cumulative,
        labels,
        values,
        expected_value,
        seed,
        DISPLAY_DECIMALS,
    )
}

/// Builds the simulation table, rounding mean and profit to `decimals`.
///
/// `n = 0` yields an empty table.
pub fn build_simulation_table_with(
    n: usize,
    cumulative: &[f64],
    labels: &[String],
    values: &[f64],
    expected_value: f64,
    seed: Seed,
    decimals: u32,
) -> SimulationTable {
    debug_assert_eq!(cumulative.len(), labels.len());
    debug_assert_eq!(values.len(), labels.len());
    debug!(
        tickets = n,
        seed = seed.get(),
        outcomes = labels.len(),
        "building simulation table"
    );

    let mut rng = seed.rng();
    let mut rows = Vec::with_capacity(n);

    for tickets in 1..=n {
        let mut counts = vec![0_usize; labels.len()];
        let mut returns = 0.0;

        for _ in 0..tickets {
            let index = select_index(rng.next_uniform(), cumulative);
            counts[index] += 1;
            returns += values[index];
        }

        let mean = returns / tickets as f64;
        rows.push(SimulationRow {
            tickets,
            counts,
            returns,
            mean_return: round_to(mean, decimals),
            profit: round_to((mean - expected_value) * tickets as f64, decimals),
        });
    }

    SimulationTable {
        seed,
        labels: labels.to_vec(),
        rows,
    }
}

/// Row for `tickets`, clamped to `[1, N]`; `None` for an empty table.
#[inline]
pub fn row_for_tickets(table: &SimulationTable, tickets: usize) -> Option<&SimulationRow> {
    table.row_for_tickets(tickets)
}

/// Rounds half up to `digits` decimals, matching JavaScript's `Math.round`
/// on the scaled value.
///
/// # Examples
///
/// ```rust
/// use lottery_sim::table::round_to;
///
/// assert_eq!(round_to(6.666_666, 2), 6.67);
/// assert_eq!(round_to(-2.5, 0), -2.0);
/// ```
#[inline]
pub fn round_to(x: f64, digits: u32) -> f64 {
    let p = 10_f64.powi(digits as i32);
    let y = x * p;
    let floor = y.floor();
    let rounded = if y - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / p
}
