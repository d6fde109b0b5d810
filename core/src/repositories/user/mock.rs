//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{AuthProvider, Role, User};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a user, replacing any with the same id
    pub async fn insert(&self, user: User) -> User {
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        user
    }

    /// Change a stored user's role
    pub async fn set_role(&self, id: Uuid, role: Option<Role>) -> bool {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.set_role(role);
                true
            }
            None => false,
        }
    }

    /// Remove a user
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut users = self.users.write().await;
        users.remove(&id).is_some()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| {
                u.email
                    .as_deref()
                    .map(|e| e.eq_ignore_ascii_case(email))
                    .unwrap_or(false)
            })
            .cloned())
    }

    async fn find_by_social_id(
        &self,
        provider: AuthProvider,
        social_id: &str,
    ) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.provider == provider && u.social_id.as_deref() == Some(social_id))
            .cloned())
    }
}
