//! # lottery_sim: Seeded Lottery Simulation (Layer 2)
//!
//! ## Role
//!
//! lottery_sim turns a described lottery and a 5-digit seed into a
//! reproducible simulation table:
//! - Mulberry32 generator (`rng`)
//! - 5-digit seeds and their expansion (`seed`)
//! - Inverse-CDF outcome selection (`sampler`)
//! - Per-ticket-count simulation tables (`table`)
//! - Two-lottery comparison runs (`run`)
//!
//! ## Reproducibility
//!
//! The same lottery, ticket ceiling and seed always give an identical table,
//! and the stream matches the web version of the simulator bit for bit.
//!
//! ## Usage Example
//!
//! ```rust
//! use lottery_core::{describe_lottery, parse_and_validate_lottery};
//! use lottery_sim::{build_simulation_table, row_for_tickets, Seed};
//!
//! let lottery = parse_and_validate_lottery("20; 40; 0", "0.25; 0.25; 0.5").unwrap();
//! let d = describe_lottery(&lottery);
//! let seed = Seed::new(12345).unwrap();
//!
//! let table = build_simulation_table(
//!     50,
//!     &d.cumulative_probabilities,
//!     &d.labels,
//!     &d.values,
//!     d.expected_value,
//!     seed,
//! );
//!
//! let row = row_for_tickets(&table, 20).unwrap();
//! assert_eq!(row.tickets, 20);
//! assert_eq!(row.total_count(), 20);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod rng;
pub mod run;
pub mod sampler;
pub mod seed;
pub mod table;

pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_TICKETS, MAX_TICKETS};
pub use error::{ConfigError, RunError};
pub use rng::Mulberry32;
pub use run::{
    run_comparison, simulate_lottery, ComparisonRequest, ComparisonRun, LotteryInput, LotteryRun,
};
pub use sampler::{select_index, select_outcome};
pub use seed::{
    generate_random_seed_5_digits, is_valid_seed_5_digits, Seed, SeedError, SeedMode,
};
pub use table::{
    build_simulation_table, build_simulation_table_with, row_for_tickets, SimulationRow,
    SimulationTable, DISPLAY_DECIMALS,
};
