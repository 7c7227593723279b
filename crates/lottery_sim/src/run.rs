//! Two-lottery comparison runs.
//!
//! A run takes the raw text of two lotteries, validates both, resolves one
//! seed and simulates both lotteries with it, so the two tables are driven by
//! identical streams.

use serde::Serialize;
use tracing::{info, warn};

use lottery_core::{
    describe_lottery, parse_and_validate_lottery_with_tolerance, Lottery, LotteryDescription,
};

use crate::config::SimulationConfig;
use crate::error::RunError;
use crate::seed::{Seed, SeedMode};
use crate::table::SimulationTable;

/// Raw text of one lottery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotteryInput {
    /// `;`-separated payoffs.
    pub values: String,
    /// `;`-separated probabilities.
    pub probabilities: String,
}

impl LotteryInput {
    /// Creates an input from payoff and probability text.
    pub fn new(values: impl Into<String>, probabilities: impl Into<String>) -> Self {
        Self {
            values: values.into(),
            probabilities: probabilities.into(),
        }
    }
}

/// Everything needed to run a comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonRequest {
    /// Lottery 1.
    pub first: LotteryInput,
    /// Lottery 2.
    pub second: LotteryInput,
    /// Seed selection.
    pub seed_mode: SeedMode,
    /// Ticket ceiling, precision and tolerance.
    pub config: SimulationConfig,
}

/// Theory and simulation for one lottery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotteryRun {
    /// Theoretical description.
    pub description: LotteryDescription,
    /// Simulation table.
    pub table: SimulationTable,
}

/// Result of a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRun {
    /// Seed used for both tables.
    pub seed: Seed,
    /// Ticket ceiling.
    pub n_max: usize,
    /// Lottery 1.
    pub first: LotteryRun,
    /// Lottery 2.
    pub second: LotteryRun,
}

/// Describes and simulates a single validated lottery.
pub fn simulate_lottery(lottery: &Lottery, n: usize, seed: Seed, decimals: u32) -> LotteryRun {
    let description = describe_lottery(lottery);
    let table = SimulationTable::from_description_with(n, &description, seed, decimals);
    LotteryRun { description, table }
}

/// Runs the full pipeline for two lotteries.
///
/// Steps: configuration check, parse and validate both lotteries (problems of
/// both are reported together), resolve the seed, then describe and simulate.
///
/// # Errors
///
/// - [`RunError::Config`] for an invalid configuration
/// - [`RunError::Lotteries`] with every lottery problem, prefixed by lottery
/// - [`RunError::Seed`] for an invalid manual seed
///
/// # Examples
///
/// ```rust
/// use lottery_sim::{run_comparison, ComparisonRequest, LotteryInput, SeedMode, SimulationConfig};
///
/// let request = ComparisonRequest {
///     first: LotteryInput::new("20; 40; 0", "0.25; 0.25; 0.5"),
///     second: LotteryInput::new("120; 140; -100", "0.3; 0.3; 0.4"),
///     seed_mode: SeedMode::Manual("12345".into()),
///     config: SimulationConfig::builder().n_max(100).build().unwrap(),
/// };
///
/// let run = run_comparison(&request).unwrap();
/// assert_eq!(run.seed.get(), 12345);
/// assert_eq!(run.first.table.len(), 100);
/// assert_eq!(run.second.table.len(), 100);
/// ```
pub fn run_comparison(request: &ComparisonRequest) -> Result<ComparisonRun, RunError> {
    let config = request.config;
    config.validate()?;

    let first = parse_input(&request.first, config.tolerance());
    let second = parse_input(&request.second, config.tolerance());

    let (first, second) = match (first, second) {
        (Ok(first), Ok(second)) => (first, second),
        (first, second) => {
            let mut messages = Vec::new();
            if let Err(err) = first {
                messages.extend(err.messages().into_iter().map(|m| format!("Lottery 1 — {}", m)));
            }
            if let Err(err) = second {
                messages.extend(err.messages().into_iter().map(|m| format!("Lottery 2 — {}", m)));
            }
            warn!(problems = messages.len(), "lottery input rejected");
            return Err(RunError::Lotteries(messages));
        }
    };

    let seed = request.seed_mode.resolve()?;
    info!(
        seed = seed.get(),
        n_max = config.n_max(),
        auto_seed = matches!(request.seed_mode, SeedMode::Auto),
        "running lottery comparison"
    );

    Ok(ComparisonRun {
        seed,
        n_max: config.n_max(),
        first: simulate_lottery(&first, config.n_max(), seed, config.decimals()),
        second: simulate_lottery(&second, config.n_max(), seed, config.decimals()),
    })
}

fn parse_input(
    input: &LotteryInput,
    tolerance: f64,
) -> Result<Lottery, lottery_core::LotteryError> {
    parse_and_validate_lottery_with_tolerance(&input.values, &input.probabilities, tolerance)
}
