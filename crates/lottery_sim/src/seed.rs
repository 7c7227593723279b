//! User-facing 5-digit seeds.
//!
//! A [`Seed`] is what the user sees, types and shares. Before it reaches the
//! generator it is expanded to a 32-bit state by a fixed multiplicative hash
//! ([`Seed::expand`]), so nearby seeds start from unrelated states.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::rng::Mulberry32;

/// Smallest valid seed.
pub const SEED_MIN: u32 = 10_000;

/// Largest valid seed.
pub const SEED_MAX: u32 = 99_999;

/// Knuth's multiplicative hash constant (`⌊2^32 / φ⌋`).
pub const SEED_HASH_MULTIPLIER: u32 = 2_654_435_761;

/// Seed validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// Seed text or value is not an integer in `10000..=99999`.
    #[error("Seed must be an integer between 10000 and 99999.")]
    OutOfRange(String),
}

/// Returns `true` when `n` is a 5-digit integer.
///
/// # Examples
///
/// ```rust
/// use lottery_sim::seed::is_valid_seed_5_digits;
///
/// assert!(!is_valid_seed_5_digits(9_999));
/// assert!(is_valid_seed_5_digits(10_000));
/// assert!(is_valid_seed_5_digits(99_999));
/// assert!(!is_valid_seed_5_digits(100_000));
/// ```
#[inline]
pub fn is_valid_seed_5_digits(n: i64) -> bool {
    (i64::from(SEED_MIN)..=i64::from(SEED_MAX)).contains(&n)
}

/// Draws a fresh 5-digit seed from ambient randomness.
///
/// This is the only impure operation of the crate; everything after the seed
/// is chosen is deterministic.
pub fn generate_random_seed_5_digits() -> u32 {
    rand::thread_rng().gen_range(SEED_MIN..=SEED_MAX)
}

/// A validated 5-digit seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Seed(u32);

impl Seed {
    /// Validates a seed value.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::OutOfRange`] outside [10000, 99999].
    pub fn new(value: i64) -> Result<Self, SeedError> {
        if is_valid_seed_5_digits(value) {
            Ok(Self(value as u32))
        } else {
            Err(SeedError::OutOfRange(value.to_string()))
        }
    }

    /// A fresh random seed.
    pub fn random() -> Self {
        Self(generate_random_seed_5_digits())
    }

    /// Seed value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// 32-bit generator state for this seed: `seed * 2654435761 mod 2^32`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lottery_sim::seed::Seed;
    ///
    /// assert_eq!(Seed::new(12345).unwrap().expand(), 2_703_968_361);
    /// ```
    #[inline]
    pub const fn expand(self) -> u32 {
        self.0.wrapping_mul(SEED_HASH_MULTIPLIER)
    }

    /// Generator positioned at the start of this seed's stream.
    #[inline]
    pub const fn rng(self) -> Mulberry32 {
        Mulberry32::new(self.expand())
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    /// Parses trimmed decimal text. Fractions, signs outside the range and
    /// trailing garbage are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        text.parse::<i64>()
            .map_err(|_| SeedError::OutOfRange(text.to_string()))
            .and_then(Self::new)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the seed of a run is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// Draw a random seed.
    #[default]
    Auto,
    /// Use the seed given as text.
    Manual(String),
}

impl SeedMode {
    /// Resolves the mode to a concrete seed.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when the manual text is not a valid seed.
    pub fn resolve(&self) -> Result<Seed, SeedError> {
        match self {
            SeedMode::Auto => Ok(Seed::random()),
            SeedMode::Manual(text) => text.parse(),
        }
    }
}
