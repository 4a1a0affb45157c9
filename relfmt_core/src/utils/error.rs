//! Centralized error handling for relfmt
//!
//! This module provides a unified error handling approach using:
//! - `thiserror` for library-style errors with proper error types
//! - `anyhow` for application-level error handling with context
//!
//! Relative time formatting itself never fails; these errors cover parsing
//! colors, timestamps and time formats, and loading configuration.
//!
//! # Usage
//!
//! ```rust
//! use relfmt_core::utils::error::ResultExt;
//!
//! fn read_settings(path: &str) -> anyhow::Result<String> {
//!     std::fs::read_to_string(path).with_file_context(path)
//! }
//! ```

use thiserror::Error;

/// Errors that can occur in relfmt
#[derive(Error, Debug)]
pub enum RelfmtError {
    /// Color string could not be parsed
    #[error("Invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: String },

    /// Time-of-day pattern is empty or not understood by chrono
    #[error("Invalid time format '{0}'")]
    InvalidTimeFormat(String),

    /// Timestamp string could not be parsed
    #[error("Invalid timestamp '{0}': expected RFC 3339, 'YYYY-MM-DD[ HH:MM[:SS]]' or epoch milliseconds")]
    InvalidTimestamp(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl RelfmtError {
    pub(crate) fn invalid_color(input: &str, reason: impl Into<String>) -> Self {
        RelfmtError::InvalidColor {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for relfmt library operations
pub type RelfmtResult<T> = std::result::Result<T, RelfmtError>;

/// Names the config file or setting a library error came from.
pub trait ResultExt<T> {
    /// "Could not use config file <path>"
    fn with_file_context(self, path: &str) -> anyhow::Result<T>;

    /// "Invalid value for <setting>", for a config key or CLI flag
    fn with_config_context(self, setting: &str) -> anyhow::Result<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_file_context(self, path: &str) -> anyhow::Result<T> {
        anyhow::Context::with_context(self, || format!("Could not use config file {}", path))
    }

    fn with_config_context(self, setting: &str) -> anyhow::Result<T> {
        anyhow::Context::with_context(self, || format!("Invalid value for {}", setting))
    }
}
