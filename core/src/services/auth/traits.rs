//! Collaborator traits for the authentication service

use async_trait::async_trait;

use crate::domain::entities::user::{AuthProvider, SocialProfile, User};
use crate::errors::DomainError;

/// Checks credentials and resolves them to an existing user
///
/// Password hashing and provider token verification live behind this
/// trait. The authentication service only starts once it has a `User`.
/// A returned user without a role cannot log in: the service refuses it
/// with `AuthError::RoleMissing` and creates no session.
#[async_trait]
pub trait LoginValidator: Send + Sync {
    /// Validate an email and password pair
    ///
    /// # Returns
    /// * `Ok(User)` - Credentials accepted
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Rejected
    async fn validate_email_login(&self, email: &str, password: &str) -> Result<User, DomainError>;

    /// Validate a profile already confirmed by a social provider
    async fn validate_social_login(
        &self,
        provider: AuthProvider,
        profile: &SocialProfile,
    ) -> Result<User, DomainError>;
}
