//! Configuration for the token service

use chrono::Duration;
use jsonwebtoken::Algorithm;
use kt_shared::{AuthConfig, ConfigError};

use crate::domain::entities::TokenKind;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Secret used to sign and verify access tokens
    pub access_secret: String,
    /// Access token lifetime
    pub access_ttl: Duration,
    /// Secret used to sign and verify refresh tokens
    pub refresh_secret: String,
    /// Refresh token lifetime
    pub refresh_ttl: Duration,
    /// JWT signing algorithm, HMAC family only
    pub algorithm: Algorithm,
}

impl TokenServiceConfig {
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
            algorithm: Algorithm::HS256,
        }
    }

    /// Build from the loaded auth configuration
    ///
    /// The auth section is validated first, so a config that loaded
    /// without errors always yields a usable token config.
    pub fn from_auth_config(auth: &AuthConfig) -> Result<Self, ConfigError> {
        auth.validate()?;

        let config = Self::new(
            auth.access_secret.clone(),
            to_chrono("auth.access_ttl", auth.access_ttl)?,
            auth.refresh_secret.clone(),
            to_chrono("auth.refresh_ttl", auth.refresh_ttl)?,
        );
        config.validate()?;
        Ok(config)
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(
            self.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(ConfigError::invalid(
                "auth.algorithm",
                format!("{:?} is not a shared-secret algorithm", self.algorithm),
            ));
        }
        if self.access_ttl <= Duration::zero() {
            return Err(ConfigError::invalid("auth.access_ttl", "must be positive"));
        }
        if self.refresh_ttl <= Duration::zero() {
            return Err(ConfigError::invalid("auth.refresh_ttl", "must be positive"));
        }
        for (key, ttl) in [
            ("auth.access_ttl", self.access_ttl),
            ("auth.refresh_ttl", self.refresh_ttl),
        ] {
            if ttl != Duration::seconds(ttl.num_seconds()) {
                return Err(ConfigError::invalid(key, "must be a whole number of seconds"));
            }
        }
        Ok(())
    }

    pub fn secret_for(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Access => &self.access_secret,
            TokenKind::Refresh => &self.refresh_secret,
        }
    }

    pub fn ttl_for(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("access_secret", &"<redacted>")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_secret", &"<redacted>")
            .field("refresh_ttl", &self.refresh_ttl)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

fn to_chrono(key: &str, ttl: std::time::Duration) -> Result<Duration, ConfigError> {
    Duration::from_std(ttl).map_err(|e| ConfigError::invalid(key, e.to_string()))
}
