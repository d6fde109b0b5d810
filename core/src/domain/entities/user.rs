//! User entity as seen by the authentication core.
//!
//! Users are owned by the user directory; this crate only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role carried in access tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// How the user authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Email,
    Google,
    Facebook,
    Apple,
    Twitter,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Email => "email",
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
            AuthProvider::Apple => "apple",
            AuthProvider::Twitter => "twitter",
        }
    }

    /// Whether this provider is a third-party social login
    pub fn is_social(&self) -> bool {
        !matches!(self, AuthProvider::Email)
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(AuthProvider::Email),
            "google" => Ok(AuthProvider::Google),
            "facebook" => Ok(AuthProvider::Facebook),
            "apple" => Ok(AuthProvider::Apple),
            "twitter" => Ok(AuthProvider::Twitter),
            _ => Err(format!("Invalid auth provider: {}", s)),
        }
    }
}

/// User entity returned by the user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, absent for some social accounts
    pub email: Option<String>,

    /// Provider the account was created with
    pub provider: AuthProvider,

    /// Identifier at the social provider
    pub social_id: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    /// Role, `None` until one is assigned
    pub role: Option<Role>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new email user with the default `user` role
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: Some(email.into()),
            provider: AuthProvider::Email,
            social_id: None,
            first_name: None,
            last_name: None,
            role: Some(Role::User),
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a new user from a social provider profile
    pub fn from_social(provider: AuthProvider, profile: &SocialProfile) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: profile.email.clone(),
            provider,
            social_id: Some(profile.id.clone()),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            role: Some(Role::User),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the role
    pub fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    pub fn has_role(&self) -> bool {
        self.role.is_some()
    }
}

/// Profile data returned by a social identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    /// Identifier at the provider
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
