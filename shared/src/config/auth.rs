//! Token signing configuration
//!
//! All four values are required. There are no defaults: a deployment that
//! forgets a secret must fail at startup, not sign with a placeholder.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::utils::duration;

/// Secrets and lifetimes for access and refresh tokens
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret used to sign access tokens
    pub access_secret: String,

    /// Access token lifetime
    #[serde(deserialize_with = "duration::deserialize")]
    pub access_ttl: Duration,

    /// Secret used to sign refresh tokens, distinct from `access_secret`
    pub refresh_secret: String,

    /// Refresh token lifetime
    #[serde(deserialize_with = "duration::deserialize")]
    pub refresh_ttl: Duration,
}

impl AuthConfig {
    /// Create a new auth configuration
    pub fn new(
        access_secret: impl Into<String>,
        access_ttl: Duration,
        refresh_secret: impl Into<String>,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access_secret: access_secret.into(),
            access_ttl,
            refresh_secret: refresh_secret.into(),
            refresh_ttl,
        }
    }

    /// Check that every value is present and usable
    ///
    /// A refresh lifetime that does not exceed the access lifetime is
    /// allowed but logged, since refreshing then never helps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_secret.trim().is_empty() {
            return Err(ConfigError::missing("auth.access_secret"));
        }
        if self.refresh_secret.trim().is_empty() {
            return Err(ConfigError::missing("auth.refresh_secret"));
        }
        if self.access_ttl.is_zero() {
            return Err(ConfigError::invalid("auth.access_ttl", "must be greater than zero"));
        }
        if self.refresh_ttl.is_zero() {
            return Err(ConfigError::invalid("auth.refresh_ttl", "must be greater than zero"));
        }
        // Token expiry is carried in whole seconds
        if self.access_ttl.subsec_nanos() != 0 {
            return Err(ConfigError::invalid("auth.access_ttl", "must be a whole number of seconds"));
        }
        if self.refresh_ttl.subsec_nanos() != 0 {
            return Err(ConfigError::invalid("auth.refresh_ttl", "must be a whole number of seconds"));
        }
        if self.refresh_ttl <= self.access_ttl {
            tracing::warn!(
                access_ttl_secs = self.access_ttl.as_secs(),
                refresh_ttl_secs = self.refresh_ttl.as_secs(),
                "refresh token lifetime does not exceed access token lifetime"
            );
        }
        if self.access_secret == self.refresh_secret {
            tracing::warn!("access and refresh tokens share the same signing secret");
        }
        Ok(())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_secret", &"<redacted>")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_secret", &"<redacted>")
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AuthConfig {
        AuthConfig::new(
            "access-secret",
            Duration::from_secs(900),
            "refresh-secret",
            Duration::from_secs(7 * 86400),
        )
    }

    #[test]
    fn test_valid_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_empty_secret_is_missing() {
        let mut config = valid();
        config.access_secret = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing { key }) if key == "auth.access_secret"
        ));

        let mut config = valid();
        config.refresh_secret = "   ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Missing { key }) if key == "auth.refresh_secret"
        ));
    }

    #[test]
    fn test_zero_ttl_is_invalid() {
        let mut config = valid();
        config.access_ttl = Duration::ZERO;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_sub_second_ttl_is_invalid() {
        let mut config = valid();
        config.access_ttl = Duration::from_millis(1500);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key, .. }) if key == "auth.access_ttl"
        ));

        let mut config = valid();
        config.refresh_ttl = Duration::from_millis(500);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key, .. }) if key == "auth.refresh_ttl"
        ));
    }

    #[test]
    fn test_short_refresh_ttl_is_allowed() {
        let mut config = valid();
        config.refresh_ttl = Duration::from_secs(60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", valid());
        assert!(!rendered.contains("access-secret"));
        assert!(!rendered.contains("refresh-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
