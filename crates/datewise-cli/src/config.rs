//! Environment configuration.

use std::str::FromStr;

use crate::error::CliError;

/// Default zone for `now` when `--zone` is not given.
pub const ZONE_VAR: &str = "DATEWISE_ZONE";
/// Log output format, `text` or `json`.
pub const LOG_FORMAT_VAR: &str = "DATEWISE_LOG_FORMAT";

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CliError::Config(format!(
                "{LOG_FORMAT_VAR} must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Settings read once at start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Zone name for `now`; empty means local.
    pub default_zone: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let default_zone = lookup(ZONE_VAR).unwrap_or_default();
        let log_format = lookup(LOG_FORMAT_VAR)
            .map(|value| value.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            default_zone,
            log_format,
        })
    }
}
