//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use kt_shared::ConfigError;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

impl DomainError {
    /// Build an internal error from anything displayable
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the caller should be told to authenticate again
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, DomainError::Auth(_))
    }

    /// Whether the failure is an expired (but otherwise valid) token
    pub fn is_expired_token(&self) -> bool {
        matches!(self, DomainError::Token(TokenError::TokenExpired))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_are_unauthorized() {
        for err in [
            AuthError::SessionNotFound,
            AuthError::SessionHashMismatch,
            AuthError::SessionRotationConflict,
            AuthError::UserNotFound,
            AuthError::RoleMissing,
            AuthError::InvalidCredentials,
        ] {
            assert!(DomainError::from(err).is_unauthorized());
        }
    }

    #[test]
    fn test_token_errors_are_not_unauthorized() {
        let expired = DomainError::from(TokenError::TokenExpired);
        assert!(!expired.is_unauthorized());
        assert!(expired.is_expired_token());

        let invalid = DomainError::from(TokenError::InvalidToken);
        assert!(!invalid.is_expired_token());
    }

    #[test]
    fn test_signing_error_message() {
        let err = DomainError::from(TokenError::SigningFailed {
            reason: "empty secret".to_string(),
        });
        assert_eq!(err.to_string(), "Token signing failed: empty secret");
    }
}
