//! # lottery_core: Discrete Lotteries (Layer 1)
//!
//! ## Role
//!
//! lottery_core is the bottom layer of the workspace and turns user text into
//! validated lotteries and their theory:
//! - Number list parsing (`parsing`)
//! - Lottery validation with aggregated issues (`lottery`, `error`)
//! - Expected value, standard deviation, cumulative probabilities and the
//!   payoff distribution (`description`)
//!
//! No randomness lives here; sampling and simulation are in `lottery_sim`.
//!
//! ## Usage Example
//!
//! ```rust
//! use lottery_core::{describe_lottery, parse_and_validate_lottery};
//!
//! let lottery = parse_and_validate_lottery("20; 40; 0", "0.25; 0.25; 0.5").unwrap();
//! let description = describe_lottery(&lottery);
//!
//! assert_eq!(description.labels, vec!["A", "B", "C"]);
//! assert_eq!(description.expected_value, 15.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod description;
pub mod error;
pub mod lottery;
pub mod parsing;

pub use description::{describe_lottery, DistributionPoint, LotteryDescription};
pub use error::{ListField, LotteryError, ValidationIssue};
pub use lottery::{
    outcome_labels, parse_and_validate_lottery, parse_and_validate_lottery_with_tolerance,
    validate_lottery, validate_lottery_with_tolerance, Lottery, MAX_OUTCOMES,
    PROBABILITY_TOLERANCE,
};
pub use parsing::{format_number_list, parse_number_list, ParseError};
