//! Session entity binding a user to the current rotation hash.

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One authenticated device or browser context
///
/// `hash` is the live rotation secret. It is empty only between creation
/// and the first token issue; an empty hash never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Server-generated identifier, never changes
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Current rotation hash
    pub hash: String,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last rotation
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session with an empty hash placeholder
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            hash: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a rotation hash has been assigned yet
    pub fn has_hash(&self) -> bool {
        !self.hash.is_empty()
    }

    /// Compares a presented hash against the stored one in constant time
    pub fn matches_hash(&self, presented: &str) -> bool {
        self.has_hash() && constant_time_eq(self.hash.as_bytes(), presented.as_bytes())
    }

    /// Applies a partial update
    pub fn apply(&mut self, update: SessionUpdate) {
        if let Some(hash) = update.hash {
            self.hash = hash;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a session row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub hash: Option<String>,
}

impl SessionUpdate {
    /// Update that only replaces the rotation hash
    pub fn hash(hash: impl Into<String>) -> Self {
        Self {
            hash: Some(hash.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_none()
    }
}
