//! Simulation run configuration.
//!
//! The probability tolerance and the display precision are inherited from the
//! web version of the simulator; both can be changed here.

use lottery_core::PROBABILITY_TOLERANCE;
use serde::Serialize;

use crate::error::ConfigError;
use crate::table::DISPLAY_DECIMALS;

/// Default ticket ceiling.
pub const DEFAULT_TICKETS: usize = 1_000;

/// Largest ticket ceiling accepted. Work grows as `N²/2` draws.
pub const MAX_TICKETS: usize = 10_000;

/// Largest rounding precision accepted.
pub const MAX_DECIMALS: u32 = 10;

/// Immutable configuration of a simulation run.
///
/// Use [`SimulationConfigBuilder`] to construct validated instances.
///
/// # Examples
///
/// ```rust
/// use lottery_sim::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_max(500)
///     .decimals(3)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_max(), 500);
/// assert_eq!(config.decimals(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationConfig {
    n_max: usize,
    decimals: u32,
    tolerance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_max: DEFAULT_TICKETS,
            decimals: DISPLAY_DECIMALS,
            tolerance: PROBABILITY_TOLERANCE,
        }
    }
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Ticket ceiling `N`.
    #[inline]
    pub fn n_max(&self) -> usize {
        self.n_max
    }

    /// Decimal places for mean return and profit.
    #[inline]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Tolerance on the probability sum.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_max` is 0 or greater than [`MAX_TICKETS`]
    /// - `decimals` is greater than [`MAX_DECIMALS`]
    /// - `tolerance` is not a positive finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_max == 0 || self.n_max > MAX_TICKETS {
            return Err(ConfigError::InvalidTicketCount {
                count: self.n_max,
                max: MAX_TICKETS,
            });
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidParameter {
                name: "decimals",
                value: format!("{} exceeds {}", self.decimals, MAX_DECIMALS),
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "tolerance",
                value: format!("{} is not a positive finite number", self.tolerance),
            });
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`]. Unset fields take their defaults.
#[derive(Debug, Clone, Default)]
pub struct SimulationConfigBuilder {
    n_max: Option<usize>,
    decimals: Option<u32>,
    tolerance: Option<f64>,
}

impl SimulationConfigBuilder {
    /// Sets the ticket ceiling.
    #[inline]
    pub fn n_max(mut self, n_max: usize) -> Self {
        self.n_max = Some(n_max);
        self
    }

    /// Sets the rounding precision.
    #[inline]
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Sets the probability-sum tolerance.
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is out of range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let defaults = SimulationConfig::default();
        let config = SimulationConfig {
            n_max: self.n_max.unwrap_or(defaults.n_max),
            decimals: self.decimals.unwrap_or(defaults.decimals),
            tolerance: self.tolerance.unwrap_or(defaults.tolerance),
        };

        config.validate()?;
        Ok(config)
    }
}
