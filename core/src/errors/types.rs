//! Error types for authentication and token operations
//!
//! `AuthError` covers every reason a login or refresh is refused. Callers
//! should treat all of them as "authenticate again". `TokenError` covers
//! signing and verification of the tokens themselves.

use thiserror::Error;

/// Authentication failures
///
/// Every variant is reported to the caller as unauthorized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Session not found")]
    SessionNotFound,

    #[error("Session hash mismatch")]
    SessionHashMismatch,

    #[error("Session was rotated concurrently")]
    SessionRotationConflict,

    #[error("User not found")]
    UserNotFound,

    #[error("User has no role assigned")]
    RoleMissing,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token signing and verification failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signature and claims were fine but `exp` has passed; the caller may
    /// try a refresh
    #[error("Token expired")]
    TokenExpired,

    /// Bad signature, wrong secret, malformed token or missing claims; the
    /// caller should reject outright
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token signing failed: {reason}")]
    SigningFailed { reason: String },
}
