//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use lottery_sim::{SimulationConfig, DEFAULT_TICKETS, DISPLAY_DECIMALS};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "lotteries.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, csv, json")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error(transparent)]
    Simulation(#[from] lottery_sim::ConfigError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formats for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Ticket ceiling N
    pub n_max: usize,
    /// Decimal places for mean return and profit
    pub decimals: u32,
    /// Tolerance on the probability sum
    pub tolerance: f64,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Default output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            n_max: DEFAULT_TICKETS,
            decimals: DISPLAY_DECIMALS,
            tolerance: lottery_core::PROBABILITY_TOLERANCE,
            log_level: LogLevel::Warn,
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    ///
    /// Values are checked once all layers are merged, so a file value may be
    /// out of range as long as a higher layer replaces it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override values from `LOTTERIES_*` variables found by `lookup`
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(n_max) = lookup("LOTTERIES_N_MAX") {
            self.n_max = parse_env("LOTTERIES_N_MAX", &n_max)?;
        }
        if let Some(decimals) = lookup("LOTTERIES_DECIMALS") {
            self.decimals = parse_env("LOTTERIES_DECIMALS", &decimals)?;
        }
        if let Some(tolerance) = lookup("LOTTERIES_TOLERANCE") {
            self.tolerance = parse_env("LOTTERIES_TOLERANCE", &tolerance)?;
        }
        if let Some(log_level) = lookup("LOTTERIES_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        if let Some(format) = lookup("LOTTERIES_FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(n_max) = cli.n_max {
            self.n_max = n_max;
        }
        if let Some(decimals) = cli.decimals {
            self.decimals = decimals;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation_config().map(|_| ())
    }

    /// Simulation settings derived from this configuration
    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        Ok(SimulationConfig::builder()
            .n_max(self.n_max)
            .decimals(self.decimals)
            .tolerance(self.tolerance)
            .build()?)
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not valid", key, value)))
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Ticket ceiling override
    pub n_max: Option<usize>,
    /// Precision override
    pub decimals: Option<u32>,
    /// Output format override
    pub format: Option<String>,
    /// Force debug logging
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (explicit, or `lotteries.toml` when present)
/// 4. Default values
pub fn build_config(cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    build_config_from(cli, |key| std::env::var(key).ok())
}

fn build_config_from<F>(cli: &CliOverrides, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default_file = Path::new(DEFAULT_CONFIG_FILE);

    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None if default_file.exists() => CliConfig::from_file(default_file)?,
        None => CliConfig::default(),
    };

    config.apply_env_from(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.n_max, 1000);
        assert_eq!(config.decimals, 2);
        assert_eq!(config.tolerance, 1e-9);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("xml").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            n_max = 250
            decimals = 3
            tolerance = 1e-6
            log_level = "info"
            format = "csv"
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.n_max, 250);
        assert_eq!(config.decimals, 3);
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("n_max = 50").unwrap();
        assert_eq!(config.n_max, 50);
        assert_eq!(config.decimals, 2);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_invalid_toml_value() {
        assert!(toml::from_str::<CliConfig>(r#"format = "xml""#).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env_from(lookup(&[
                ("LOTTERIES_N_MAX", "300"),
                ("LOTTERIES_FORMAT", "json"),
                ("LOTTERIES_LOG_LEVEL", "error"),
            ]))
            .unwrap();

        assert_eq!(config.n_max, 300);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn test_env_parse_error() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env_from(lookup(&[("LOTTERIES_N_MAX", "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
    }

    #[test]
    fn test_cli_merge() {
        let mut config = CliConfig::default();
        let cli = CliOverrides {
            n_max: Some(42),
            decimals: Some(4),
            format: Some("json".to_string()),
            verbose: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.n_max, 42);
        assert_eq!(config.decimals, 4);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_validate_rejects_bad_simulation_settings() {
        let config = CliConfig {
            n_max: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Simulation(
                lottery_sim::ConfigError::InvalidTicketCount { .. }
            ))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/lotteries.toml")).unwrap_err();
        assert!(err.to_string().contains("Configuration file error"));
    }

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "lotteries-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_file_out_of_range_value_replaced_by_flag() {
        let path = write_config("override", "n_max = 20000\ndecimals = 3\n");
        let cli = CliOverrides {
            config_file: Some(path.clone()),
            n_max: Some(100),
            ..Default::default()
        };

        let config = build_config_from(&cli, lookup(&[])).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.n_max, 100);
        assert_eq!(config.decimals, 3);
    }

    #[test]
    fn test_layer_precedence() {
        let path = write_config(
            "layers",
            "n_max = 200\ndecimals = 3\nformat = \"csv\"\n",
        );
        let cli = CliOverrides {
            config_file: Some(path.clone()),
            format: Some("json".to_string()),
            ..Default::default()
        };

        let config = build_config_from(
            &cli,
            lookup(&[("LOTTERIES_N_MAX", "300"), ("LOTTERIES_FORMAT", "table")]),
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.n_max, 300);
        assert_eq!(config.decimals, 3);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.tolerance, 1e-9);
    }

    #[test]
    fn test_merged_out_of_range_value_rejected() {
        let path = write_config("invalid", "n_max = 20000\n");
        let cli = CliOverrides {
            config_file: Some(path.clone()),
            ..Default::default()
        };

        let result = build_config_from(&cli, lookup(&[]));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(ConfigError::Simulation(
                lottery_sim::ConfigError::InvalidTicketCount { count: 20000, .. }
            ))
        ));
    }
}
