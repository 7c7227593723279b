//! Lotteries CLI - Seeded Monte Carlo Simulation of Discrete Lotteries
//!
//! Operational entry point for the lottery simulator.
//!
//! # Commands
//!
//! - `lotteries simulate` - Compare two lotteries over 1..N tickets
//! - `lotteries describe` - Print the theory of one lottery
//! - `lotteries check` - Print the effective configuration
//!
//! # Architecture
//!
//! This crate sits on top of `lottery_core` (parsing, validation, theory) and
//! `lottery_sim` (generator, tables, comparison runs) and only adds
//! configuration, logging and output formatting.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliConfig, CliOverrides};

/// Seeded lottery simulator
#[derive(Parser)]
#[command(name = "lotteries")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./lotteries.toml when present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format (table, csv, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate two lotteries with a shared seed
    Simulate {
        /// Payoffs of lottery 1, e.g. "20; 40; 0"
        #[arg(long)]
        values1: String,

        /// Probabilities of lottery 1, e.g. "0.25; 0.25; 0.5"
        #[arg(long)]
        probs1: String,

        /// Payoffs of lottery 2
        #[arg(long)]
        values2: String,

        /// Probabilities of lottery 2
        #[arg(long)]
        probs2: String,

        /// Maximum number of tickets N
        #[arg(short, long)]
        n_max: Option<usize>,

        /// Decimal places for mean returns and profit
        #[arg(short, long)]
        decimals: Option<u32>,

        /// 5-digit seed; drawn at random when omitted
        #[arg(short, long)]
        seed: Option<String>,

        /// Show only the row for this ticket count (clamped to 1..N)
        #[arg(short, long)]
        tickets: Option<usize>,
    },

    /// Describe a single lottery
    Describe {
        /// Payoffs, e.g. "20; 40; 0"
        #[arg(long)]
        values: String,

        /// Probabilities, e.g. "0.25; 0.25; 0.5"
        #[arg(long)]
        probs: String,
    },

    /// Check the effective configuration
    Check,
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn overrides(cli: &Cli) -> CliOverrides {
    let (n_max, decimals) = match &cli.command {
        Commands::Simulate { n_max, decimals, .. } => (*n_max, *decimals),
        _ => (None, None),
    };

    CliOverrides {
        config_file: cli.config.as_ref().map(Into::into),
        n_max,
        decimals,
        format: cli.format.clone(),
        verbose: cli.verbose,
    }
}

fn run(cli: Cli, config: &CliConfig) -> Result<()> {
    match cli.command {
        Commands::Simulate {
            values1,
            probs1,
            values2,
            probs2,
            seed,
            tickets,
            ..
        } => commands::simulate::run(
            commands::simulate::SimulateArgs {
                values1,
                probs1,
                values2,
                probs2,
                seed,
                tickets,
            },
            config,
        ),
        Commands::Describe { values, probs } => commands::describe::run(&values, &probs, config),
        Commands::Check => commands::check::run(config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&overrides(&cli)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);
    debug!(?config, "configuration loaded");

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("command failed");
            for message in err.messages() {
                eprintln!("error: {}", message);
            }
            ExitCode::FAILURE
        }
    }
}
