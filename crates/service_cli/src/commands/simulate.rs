//! Simulate command implementation
//!
//! Runs the two-lottery comparison and renders theory and simulation.

use std::io::Write;

use serde::Serialize;
use tracing::info;

use lottery_sim::{
    run_comparison, ComparisonRequest, ComparisonRun, LotteryInput, SeedMode, SimulationRow,
};

use crate::config::{CliConfig, OutputFormat};
use crate::output;
use crate::Result;

/// Arguments of the simulate command
#[derive(Debug, Clone, Default)]
pub struct SimulateArgs {
    pub values1: String,
    pub probs1: String,
    pub values2: String,
    pub probs2: String,
    pub seed: Option<String>,
    pub tickets: Option<usize>,
}

/// Rows of both lotteries at one ticket count
#[derive(Debug, Serialize)]
struct RowSelection<'a> {
    seed: u32,
    n_max: usize,
    tickets: usize,
    first: Option<&'a SimulationRow>,
    second: Option<&'a SimulationRow>,
}

/// Run the simulate command
pub fn run(args: SimulateArgs, config: &CliConfig) -> Result<()> {
    let request = ComparisonRequest {
        first: LotteryInput::new(args.values1, args.probs1),
        second: LotteryInput::new(args.values2, args.probs2),
        seed_mode: args.seed.map_or(SeedMode::Auto, SeedMode::Manual),
        config: config.simulation_config()?,
    };

    let comparison = run_comparison(&request)?;
    info!(seed = comparison.seed.get(), "simulation complete");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &comparison, args.tickets, config)
}

/// Render a comparison run in the configured format
pub fn render<W: Write>(
    out: &mut W,
    comparison: &ComparisonRun,
    tickets: Option<usize>,
    config: &CliConfig,
) -> Result<()> {
    match config.format {
        OutputFormat::Json => {
            match tickets {
                Some(t) => {
                    let selection = RowSelection {
                        seed: comparison.seed.get(),
                        n_max: comparison.n_max,
                        tickets: t.clamp(1, comparison.n_max),
                        first: comparison.first.table.row_for_tickets(t),
                        second: comparison.second.table.row_for_tickets(t),
                    };
                    serde_json::to_writer_pretty(&mut *out, &selection)?;
                }
                None => serde_json::to_writer_pretty(&mut *out, comparison)?,
            }
            writeln!(out)?;
        }
        OutputFormat::Csv => output::write_comparison_csv(&mut *out, comparison, tickets)?,
        OutputFormat::Table => {
            writeln!(out, "Seed: {}   N: {}", comparison.seed, comparison.n_max)?;
            for (title, lottery) in [
                ("Lottery 1", &comparison.first),
                ("Lottery 2", &comparison.second),
            ] {
                writeln!(out)?;
                output::write_description(out, title, &lottery.description)?;
                writeln!(out)?;

                let table = &lottery.table;
                match tickets.and_then(|t| table.row_for_tickets(t)) {
                    Some(row) => output::write_row(out, table, row, config.decimals)?,
                    None => output::write_table(out, table, config.decimals)?,
                }
            }
        }
    }
    Ok(())
}
