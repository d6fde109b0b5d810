//! Session repository trait: the durable half of the refresh anti-replay
//! contract.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::session::{Session, SessionUpdate};
use crate::errors::DomainError;

/// Repository trait for Session persistence operations
///
/// Every operation is atomic per row. No operation spans more than one
/// session, except the bulk deletion by user.
///
/// Implementations must not cache sessions in process memory: the live
/// rotation hash has to be read from shared storage on every refresh or
/// rotation breaks across multiple instances.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Create a new session for a user with an empty hash
    ///
    /// # Arguments
    /// * `user_id` - The owning user
    ///
    /// # Returns
    /// * `Ok(Session)` - The stored session, including its generated id
    /// * `Err(DomainError)` - Storage failure
    async fn create(&self, user_id: Uuid) -> Result<Session, DomainError>;

    /// Find a session by id
    ///
    /// # Returns
    /// * `Ok(Some(Session))` - Session found
    /// * `Ok(None)` - No such session
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError>;

    /// Find every session belonging to a user
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Session>, DomainError>;

    /// Apply a partial update unconditionally
    ///
    /// # Returns
    /// * `Ok(true)` - Session updated
    /// * `Ok(false)` - No such session
    /// * `Err(DomainError)` - Storage failure
    async fn update(&self, id: Uuid, update: SessionUpdate) -> Result<bool, DomainError>;

    /// Replace the hash only if the stored hash still equals `expected_hash`
    ///
    /// This is a single compare-and-swap. Two concurrent callers presenting
    /// the same hash cannot both succeed. A session whose stored hash is
    /// empty never matches.
    ///
    /// # Returns
    /// * `Ok(true)` - Hash rotated
    /// * `Ok(false)` - Session missing or hash no longer matches
    /// * `Err(DomainError)` - Storage failure
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use kt_core::repositories::SessionRepository;
    /// # async fn example(repo: &impl SessionRepository, id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
    /// if !repo.rotate_hash(id, "old-hash", "new-hash").await? {
    ///     println!("Session was rotated or deleted by another request");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn rotate_hash(
        &self,
        id: Uuid,
        expected_hash: &str,
        new_hash: &str,
    ) -> Result<bool, DomainError>;

    /// Delete a session
    ///
    /// # Returns
    /// * `Ok(true)` - Session deleted
    /// * `Ok(false)` - Session did not exist
    /// * `Err(DomainError)` - Storage failure
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every session of a user
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of sessions deleted
    /// * `Err(DomainError)` - Storage failure
    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<usize, DomainError>;

    /// Count sessions for a user
    async fn count_user_sessions(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let sessions = self.find_by_user_id(user_id).await?;
        Ok(sessions.len())
    }
}
