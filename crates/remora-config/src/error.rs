//! Error types for settings validation.

use thiserror::Error;

/// Primary error type for settings validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Static reason describing the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
}

/// Convenience alias for settings validation results.
pub type ConfigResult<T> = Result<T, ConfigError>;
