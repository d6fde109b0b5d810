//! Mock implementations for testing authentication service

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::session::{Session, SessionUpdate};
use crate::domain::entities::user::{AuthProvider, SocialProfile, User};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockSessionRepository, MockUserRepository, SessionRepository, UserRepository};
use crate::services::auth::LoginValidator;

/// Validator that checks passwords from a table and resolves users
/// through the mock user directory
pub struct MockLoginValidator {
    users: Arc<MockUserRepository>,
    passwords: Mutex<HashMap<String, String>>,
}

impl MockLoginValidator {
    pub fn new(users: Arc<MockUserRepository>) -> Self {
        Self {
            users,
            passwords: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_password(&self, email: &str, password: &str) {
        self.passwords
            .lock()
            .unwrap()
            .insert(email.to_lowercase(), password.to_string());
    }
}

#[async_trait]
impl LoginValidator for MockLoginValidator {
    async fn validate_email_login(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let accepted = self
            .passwords
            .lock()
            .unwrap()
            .get(&email.to_lowercase())
            .map(|stored| stored == password)
            .unwrap_or(false);
        if !accepted {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        self.users
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))
    }

    async fn validate_social_login(
        &self,
        provider: AuthProvider,
        profile: &SocialProfile,
    ) -> Result<User, DomainError> {
        self.users
            .find_by_social_id(provider, &profile.id)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))
    }
}

/// How `UnwritableSessionRepository::update` misbehaves
#[derive(Debug, Clone, Copy)]
pub enum UpdateFailure {
    /// The store reports an error
    Error,
    /// The store reports that no row matched
    Missing,
}

/// Session store whose `update` never succeeds; everything else goes to
/// the in-memory mock
pub struct UnwritableSessionRepository {
    inner: Arc<MockSessionRepository>,
    failure: UpdateFailure,
}

impl UnwritableSessionRepository {
    pub fn new(inner: Arc<MockSessionRepository>, failure: UpdateFailure) -> Self {
        Self { inner, failure }
    }
}

#[async_trait]
impl SessionRepository for UnwritableSessionRepository {
    async fn create(&self, user_id: Uuid) -> Result<Session, DomainError> {
        self.inner.create(user_id).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Session>, DomainError> {
        self.inner.find_by_user_id(user_id).await
    }

    async fn update(&self, _id: Uuid, _update: SessionUpdate) -> Result<bool, DomainError> {
        match self.failure {
            UpdateFailure::Error => Err(DomainError::internal("session update failed")),
            UpdateFailure::Missing => Ok(false),
        }
    }

    async fn rotate_hash(
        &self,
        id: Uuid,
        expected_hash: &str,
        new_hash: &str,
    ) -> Result<bool, DomainError> {
        self.inner.rotate_hash(id, expected_hash, new_hash).await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        self.inner.delete_by_id(id).await
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<usize, DomainError> {
        self.inner.delete_by_user_id(user_id).await
    }
}
