//! Responses returned by login and refresh.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::IssuedTokens;
use crate::domain::entities::user::User;

/// Result of a successful login or social login
///
/// Carries the user profile so the client can cache it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token bound to the new session
    pub refresh_token: String,

    /// Access token expiry, epoch milliseconds
    pub token_expires_at_ms: i64,

    pub user: User,
}

impl LoginResponse {
    pub fn new(tokens: IssuedTokens, user: User) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_expires_at_ms: tokens.token_expires,
            user,
        }
    }
}

/// Result of a successful refresh; never includes the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token expiry, epoch milliseconds
    pub token_expires_at_ms: i64,
}

impl From<IssuedTokens> for RefreshResponse {
    fn from(tokens: IssuedTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_expires_at_ms: tokens.token_expires,
        }
    }
}
