//! # Infrastructure Layer
//!
//! This crate implements the storage collaborators of the Keyturn core.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL session registry and user directory using SQLx
//! - **Migrations**: schema for `users` and `sessions`, applied by the
//!   `keyturn-migrate` binary or at startup
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use kt_core::errors::DomainError;
use kt_shared::ConfigError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Invalid infrastructure setting
    #[error("Configuration error: {0}")]
    Config(String),

    /// Application configuration could not be loaded
    #[error(transparent)]
    Settings(#[from] ConfigError),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::internal(err.to_string())
    }
}
