//! Shared utilities for the Keyturn workspace
//!
//! This crate provides functionality used by every other crate:
//! - Configuration types and layered loading
//! - Configuration error type
//! - Duration parsing for human-readable TTLs
//! - Tracing subscriber initialisation

pub mod config;
pub mod errors;
pub mod telemetry;
pub mod utils;

// Re-export commonly used items at crate root
pub use crate::config::{AppConfig, AuthConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig};
pub use crate::errors::ConfigError;
pub use crate::utils::duration;
