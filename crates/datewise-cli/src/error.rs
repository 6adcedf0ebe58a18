//! Datewise CLI — error types.

use datewise_core::TimeError;
use thiserror::Error;

/// Start-up and command errors for the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// An environment variable holds an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// A time or date operation failed.
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Rendering JSON output failed.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Returns `true` when the failure stems from misuse rather than bad input data.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Time(err) => err.is_contract_violation(),
            Self::Output(_) => false,
        }
    }
}
