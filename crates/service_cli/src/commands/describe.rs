//! Describe command implementation
//!
//! Validates one lottery and prints its theoretical moments.

use std::io::Write;

use lottery_core::{describe_lottery, parse_and_validate_lottery_with_tolerance};
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::output;
use crate::Result;

/// Run the describe command
pub fn run(values: &str, probs: &str, config: &CliConfig) -> Result<()> {
    let lottery = parse_and_validate_lottery_with_tolerance(values, probs, config.tolerance)?;
    info!(outcomes = lottery.len(), "lottery validated");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &describe_lottery(&lottery), config.format)
}

fn render<W: Write>(
    out: &mut W,
    description: &lottery_core::LotteryDescription,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => output::write_description(out, "Lottery", description)?,
        OutputFormat::Csv => output::write_description_csv(&mut *out, description)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, description)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
