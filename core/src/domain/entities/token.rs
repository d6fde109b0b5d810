//! Token entities for JWT-based authentication.
//!
//! Neither token kind is persisted. Access tokens are verified by
//! signature and expiry alone; refresh tokens additionally carry the
//! session's rotation hash, which must match the stored one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Role;

/// Which of the two token kinds is being signed or verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Access => f.write_str("access"),
            TokenKind::Refresh => f.write_str("refresh"),
        }
    }
}

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessClaims {
    /// User ID
    pub id: Uuid,

    /// Role at the time the token was issued
    pub role: Role,

    /// Session the token belongs to
    pub session_id: Uuid,
}

/// Claims carried by a refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshClaims {
    /// Session the token belongs to
    pub session_id: Uuid,

    /// Rotation hash that was live when the token was issued
    pub hash: String,
}

/// A signed token together with its absolute expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SignedToken {
    /// Expiry as milliseconds since the Unix epoch
    pub fn expires_at_ms(&self) -> i64 {
        self.expires_at.timestamp_millis()
    }
}

/// Output of one issue: a token pair bound to a session plus the new hash
///
/// The caller persists `hash` on the session row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token expiry, epoch milliseconds
    pub token_expires: i64,
    pub hash: String,
}
