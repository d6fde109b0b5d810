//! Token pair issuing
//!
//! An issue is one rotation step: a new hash, an access token bound to the
//! user and session, and a refresh token bound to the session and the new
//! hash. Persisting the hash is the caller's job.

use std::sync::Arc;

use kt_shared::AuthConfig;
use uuid::Uuid;

use crate::domain::entities::{AccessClaims, IssuedTokens, RefreshClaims, Role, TokenKind};
use crate::errors::DomainError;

use super::config::TokenServiceConfig;
use super::hash_generator::{RotationHashGenerator, SecureHashGenerator};
use super::signer::TokenSigner;

/// Issues and verifies session-bound token pairs
pub struct TokenIssuer {
    config: TokenServiceConfig,
    signer: TokenSigner,
    hash_generator: Arc<dyn RotationHashGenerator>,
}

impl TokenIssuer {
    /// Creates an issuer backed by the OS random source
    pub fn new(config: TokenServiceConfig) -> Self {
        Self::with_hash_generator(config, Arc::new(SecureHashGenerator))
    }

    /// Creates an issuer with an explicit hash generator
    pub fn with_hash_generator(
        config: TokenServiceConfig,
        hash_generator: Arc<dyn RotationHashGenerator>,
    ) -> Self {
        let signer = TokenSigner::new(config.algorithm);
        Self {
            config,
            signer,
            hash_generator,
        }
    }

    /// Creates an issuer straight from the loaded auth configuration
    pub fn from_auth_config(auth: &AuthConfig) -> Result<Self, DomainError> {
        Ok(Self::new(TokenServiceConfig::from_auth_config(auth)?))
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Generates a fresh hash and signs a token pair around it
    ///
    /// `token_expires` in the result is the access token expiry in epoch
    /// milliseconds.
    pub fn issue(
        &self,
        user_id: Uuid,
        role: Role,
        session_id: Uuid,
    ) -> Result<IssuedTokens, DomainError> {
        let hash = self.hash_generator.generate();

        let access = self.signer.sign(
            TokenKind::Access,
            &AccessClaims {
                id: user_id,
                role,
                session_id,
            },
            self.config.secret_for(TokenKind::Access),
            self.config.ttl_for(TokenKind::Access),
        )?;

        let refresh = self.signer.sign(
            TokenKind::Refresh,
            &RefreshClaims {
                session_id,
                hash: hash.clone(),
            },
            self.config.secret_for(TokenKind::Refresh),
            self.config.ttl_for(TokenKind::Refresh),
        )?;

        tracing::debug!(
            user_id = %user_id,
            session_id = %session_id,
            role = %role,
            "Issued token pair"
        );

        let token_expires = access.expires_at_ms();

        Ok(IssuedTokens {
            access_token: access.token,
            refresh_token: refresh.token,
            token_expires,
            hash,
        })
    }

    /// Verifies an access token under the access secret
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, DomainError> {
        self.signer.verify(
            TokenKind::Access,
            token,
            self.config.secret_for(TokenKind::Access),
        )
    }

    /// Verifies a refresh token under the refresh secret
    ///
    /// Only the signature and expiry are checked here. Whether the hash is
    /// still live is decided against the session registry.
    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshClaims, DomainError> {
        self.signer.verify(
            TokenKind::Refresh,
            token,
            self.config.secret_for(TokenKind::Refresh),
        )
    }
}
