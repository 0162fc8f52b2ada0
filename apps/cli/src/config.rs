//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override what is loaded here.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

use rounding_core::DigitCount;

/// Default digit count setting.
pub const DIGITS_VAR: &str = "PRECISE_ROUND_DIGITS";

/// Default output format (`text` or `json`).
pub const FORMAT_VAR: &str = "PRECISE_ROUND_FORMAT";

/// Log filter used when `RUST_LOG` is not set.
pub const LOG_VAR: &str = "PRECISE_ROUND_LOG";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `VALUE ± UNCERTAINTY`
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(FORMAT_VAR.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Digit count used when `--digits` is not given
    pub digits: DigitCount,

    /// Output format used when `--json` / `--text` is not given
    pub format: OutputFormat,

    /// tracing filter directive (default: warn)
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            digits: DigitCount::Auto,
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let digits = match lookup(DIGITS_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue(DIGITS_VAR.to_string()))?,
            None => defaults.digits,
        };

        let format = match lookup(FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.format,
        };

        let log_level = lookup(LOG_VAR).unwrap_or(defaults.log_level);
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue(LOG_VAR.to_string()));
        }

        Ok(CliConfig {
            digits,
            format,
            log_level,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.digits, DigitCount::Auto);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (DIGITS_VAR, "2"),
            (FORMAT_VAR, "JSON"),
            (LOG_VAR, "rounding_core=debug"),
        ]))
        .unwrap();
        assert_eq!(config.digits, DigitCount::Fixed(2));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "rounding_core=debug");
    }

    #[test]
    fn test_invalid_values() {
        let err = CliConfig::from_lookup(lookup_from(&[(DIGITS_VAR, "0")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PRECISE_ROUND_DIGITS");

        let err = CliConfig::from_lookup(lookup_from(&[(FORMAT_VAR, "xml")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PRECISE_ROUND_FORMAT");

        assert!(CliConfig::from_lookup(lookup_from(&[(LOG_VAR, " ")])).is_err());
    }
}
