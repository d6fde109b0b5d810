//! User directory trait.
//!
//! The authentication core only reads users. Registration, profile
//! updates and deletion live with whoever owns the user records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::{AuthProvider, User};
use crate::errors::DomainError;

/// Read-only lookups over user records
///
/// Returned users must expose their current `role`; refresh re-reads it on
/// every call so role changes reach new access tokens without re-login.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the user
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email address (case-insensitive)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their identifier at a social provider
    ///
    /// # Arguments
    /// * `provider` - The social provider
    /// * `social_id` - The provider's identifier for the user
    async fn find_by_social_id(
        &self,
        provider: AuthProvider,
        social_id: &str,
    ) -> Result<Option<User>, DomainError>;
}
