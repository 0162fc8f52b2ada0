//! # CLI Error Types
//!
//! Everything that can stop `precise-round`, mapped to a process exit code.
//!
//! ```text
//! ConfigError ──┐
//! usage errors ─┼──► CliError ──► exit code 2
//! RoundingError ┼──► CliError ──► exit code 1
//! serde_json ───┘
//! ```

use std::process::ExitCode;
use thiserror::Error;

use crate::config::ConfigError;
use rounding_core::RoundingError;

/// Errors surfaced by the command-line caller.
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong arguments; the message is shown above the usage text.
    #[error("{0}")]
    Usage(String),

    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Inputs were rejected by the rounding engine.
    #[error("{0}")]
    Rounding(#[from] RoundingError),

    /// Result could not be serialized.
    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_status(&self) -> u8 {
        match self {
            CliError::Usage(_) | CliError::Config(_) => 2,
            CliError::Rounding(_) | CliError::Json(_) => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
