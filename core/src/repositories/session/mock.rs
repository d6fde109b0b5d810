//! Mock implementation of SessionRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::session::{Session, SessionUpdate};
use crate::errors::DomainError;

use super::r#trait::SessionRepository;

/// Mock session repository for testing
///
/// `rotate_hash` runs under the write lock, so it has the same
/// compare-and-swap guarantee as the SQL implementation.
pub struct MockSessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl MockSessionRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for MockSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn create(&self, user_id: Uuid) -> Result<Session, DomainError> {
        let session = Session::new(user_id);
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, update: SessionUpdate) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;

        if let Some(session) = sessions.get_mut(&id) {
            session.apply(update);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn rotate_hash(
        &self,
        id: Uuid,
        expected_hash: &str,
        new_hash: &str,
    ) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(&id) {
            Some(session) if session.matches_hash(expected_hash) => {
                session.apply(SessionUpdate::hash(new_hash));
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(&id).is_some())
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let mut sessions = self.sessions.write().await;
        let initial_count = sessions.len();

        sessions.retain(|_, session| session.user_id != user_id);

        Ok(initial_count - sessions.len())
    }
}
