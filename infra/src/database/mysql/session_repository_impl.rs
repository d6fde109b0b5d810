//! MySQL implementation of the SessionRepository trait.
//!
//! Sessions are always read from the table; nothing is cached in process,
//! so every instance sees the same live rotation hash.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kt_core::domain::entities::session::{Session, SessionUpdate};
use kt_core::errors::DomainError;
use kt_core::repositories::SessionRepository;

use super::db_error;

/// MySQL implementation of SessionRepository
pub struct MySqlSessionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    /// Create a new MySQL session repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Session entity
    fn row_to_session(row: &sqlx::mysql::MySqlRow) -> Result<Session, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;

        Ok(Session {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid session UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            hash: row
                .try_get("hash")
                .map_err(|e| DomainError::internal(format!("Failed to get hash: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn create(&self, user_id: Uuid) -> Result<Session, DomainError> {
        let session = Session::new(user_id);

        let query = r#"
            INSERT INTO sessions (id, user_id, hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(session.id.to_string())
            .bind(session.user_id.to_string())
            .bind(&session.hash)
            .bind(session.created_at)
            .bind(session.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("create session", e))?;

        tracing::debug!(session_id = %session.id, user_id = %user_id, "Session row created");
        Ok(session)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT id, user_id, hash, created_at, updated_at
            FROM sessions
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find session", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_session(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Session>, DomainError> {
        let query = r#"
            SELECT id, user_id, hash, created_at, updated_at
            FROM sessions
            WHERE user_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("find user sessions", e))?;

        rows.iter().map(Self::row_to_session).collect()
    }

    async fn update(&self, id: Uuid, update: SessionUpdate) -> Result<bool, DomainError> {
        let now = Utc::now();

        let result = match update.hash {
            Some(hash) => {
                sqlx::query("UPDATE sessions SET hash = ?, updated_at = ? WHERE id = ?")
                    .bind(hash)
                    .bind(now)
                    .bind(id.to_string())
                    .execute(&self.pool)
                    .await
            }
            None => {
                sqlx::query("UPDATE sessions SET updated_at = ? WHERE id = ?")
                    .bind(now)
                    .bind(id.to_string())
                    .execute(&self.pool)
                    .await
            }
        }
        .map_err(|e| db_error("update session", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn rotate_hash(
        &self,
        id: Uuid,
        expected_hash: &str,
        new_hash: &str,
    ) -> Result<bool, DomainError> {
        if expected_hash.is_empty() {
            return Ok(false);
        }

        // Single conditional write; InnoDB row locking serialises racers
        let query = r#"
            UPDATE sessions
            SET hash = ?, updated_at = ?
            WHERE id = ? AND hash = ? AND hash <> ''
        "#;

        let result = sqlx::query(query)
            .bind(new_hash)
            .bind(Utc::now())
            .bind(id.to_string())
            .bind(expected_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("rotate session hash", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete session", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete user sessions", e))?;

        Ok(result.rows_affected() as usize)
    }

    async fn count_user_sessions(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count user sessions", e))?;

        Ok(count as usize)
    }
}
