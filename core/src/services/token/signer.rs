//! JWT signing and verification
//!
//! The signer knows nothing about sessions. It wraps caller claims with
//! `iat`/`exp`, signs them under the given secret and, on the way back,
//! separates an expired token from one that is simply not valid.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{SignedToken, TokenKind};
use crate::errors::{DomainError, TokenError};

/// Claims as written to the wire
#[derive(Serialize)]
struct OutgoingClaims<'a, C> {
    #[serde(flatten)]
    claims: &'a C,
    iat: i64,
    exp: i64,
}

/// Claims as read back from the wire
#[derive(Deserialize)]
struct IncomingClaims<C> {
    #[serde(flatten)]
    claims: C,
    #[allow(dead_code)]
    iat: i64,
    #[allow(dead_code)]
    exp: i64,
}

/// Signs and verifies tokens with a shared-secret algorithm
#[derive(Debug, Clone)]
pub struct TokenSigner {
    algorithm: Algorithm,
}

impl TokenSigner {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sign `claims` so that the token expires `ttl` from now
    ///
    /// # Errors
    ///
    /// * `TokenError::SigningFailed` - empty secret, a ttl that is not a
    ///   positive whole number of seconds, or the encoder rejected the claims
    pub fn sign<C: Serialize>(
        &self,
        kind: TokenKind,
        claims: &C,
        secret: &str,
        ttl: Duration,
    ) -> Result<SignedToken, DomainError> {
        if secret.is_empty() {
            return Err(signing_failed(format!("{} secret is empty", kind)));
        }
        if ttl <= Duration::zero() {
            return Err(signing_failed(format!("{} ttl must be positive", kind)));
        }
        if ttl != Duration::seconds(ttl.num_seconds()) {
            return Err(signing_failed(format!("{} ttl must be whole seconds", kind)));
        }

        // `exp` has second precision; keep the reported expiry identical to it
        let issued_at = DateTime::<Utc>::from_timestamp(Utc::now().timestamp(), 0)
            .ok_or_else(|| signing_failed("clock is out of range".to_string()))?;
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| signing_failed(format!("{} ttl is out of range", kind)))?;

        let outgoing = OutgoingClaims {
            claims,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::new(self.algorithm),
            &outgoing,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(kind = %kind, error = %e, "Failed to sign token");
            signing_failed(e.to_string())
        })?;

        Ok(SignedToken {
            token,
            issued_at,
            expires_at,
        })
    }

    /// Verify signature and expiry, then return the caller claims
    ///
    /// # Errors
    ///
    /// * `TokenError::TokenExpired` - signature is good but `exp` has passed
    /// * `TokenError::InvalidToken` - anything else
    pub fn verify<C: DeserializeOwned>(
        &self,
        kind: TokenKind,
        token: &str,
        secret: &str,
    ) -> Result<C, DomainError> {
        if secret.is_empty() {
            return Err(DomainError::Token(TokenError::InvalidToken));
        }

        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;

        let data = decode::<IncomingClaims<C>>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
            other => {
                tracing::debug!(kind = %kind, reason = ?other, "Token rejected");
                DomainError::Token(TokenError::InvalidToken)
            }
        })?;

        Ok(data.claims.claims)
    }
}

impl Default for TokenSigner {
    fn default() -> Self {
        Self::new(Algorithm::HS256)
    }
}

fn signing_failed(reason: String) -> DomainError {
    DomainError::Token(TokenError::SigningFailed { reason })
}
