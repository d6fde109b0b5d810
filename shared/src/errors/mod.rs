//! Configuration error type
//!
//! Every variant is fatal at startup. Nothing in the request path produces
//! a `ConfigError`.

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    Missing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: String, reason: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Failed to initialise tracing: {0}")]
    Telemetry(String),
}

impl ConfigError {
    /// Shorthand for a missing key
    pub fn missing(key: impl Into<String>) -> Self {
        Self::Missing { key: key.into() }
    }

    /// Shorthand for an invalid value
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
