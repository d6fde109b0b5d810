//! Configuration module with business-specific sub-modules
//!
//! - `auth` - token secrets and lifetimes
//! - `database` - MySQL connection pool settings
//! - `environment` - environment detection and logging configuration
//!
//! Sources are layered: `.env` file, then `config/<environment>.toml`
//! (optional), then `APP__*` environment variables.

pub mod auth;
pub mod database;
pub mod environment;

use std::path::Path;

use serde::Deserialize;

use crate::errors::ConfigError;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Prefix for environment variable overrides, e.g. `APP__AUTH__ACCESS_TTL`
pub const ENV_PREFIX: &str = "APP";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Token configuration, always required
    pub auth: AuthConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the file for the current environment and
    /// `APP__*` environment variables
    ///
    /// Missing auth settings are fatal.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let logging = LoggingConfig::for_environment(environment);
        let source = ::config::Config::builder()
            .set_default("environment", environment.to_string())?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format.as_str())?
            .add_source(
                ::config::File::from(Path::new(environment.config_file())).required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_source(source)
    }

    /// Deserialize and validate an already-built configuration source
    pub fn from_source(source: ::config::Config) -> Result<Self, ConfigError> {
        let config: AppConfig = source.try_deserialize()?;
        config.validate()?;

        tracing::debug!(
            environment = %config.environment,
            access_ttl_secs = config.auth.access_ttl.as_secs(),
            refresh_ttl_secs = config.auth.refresh_ttl.as_secs(),
            "configuration loaded"
        );

        Ok(config)
    }

    /// Validate every sub-configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()?;
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::missing("database.url"));
        }
        Ok(())
    }
}
