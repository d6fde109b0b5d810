//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kt_core::domain::entities::user::{AuthProvider, Role, User};
use kt_core::errors::DomainError;
use kt_core::repositories::UserRepository;

use super::db_error;

const USER_COLUMNS: &str =
    "id, email, provider, social_id, first_name, last_name, role, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a user row
    ///
    /// User records are owned elsewhere; this exists for seeding and for
    /// operators provisioning accounts.
    pub async fn insert(&self, user: &User) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, provider, social_id, first_name, last_name, role,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(user.email.as_deref().map(str::to_lowercase))
            .bind(user.provider.as_str())
            .bind(user.social_id.as_deref())
            .bind(user.first_name.as_deref())
            .bind(user.last_name.as_deref())
            .bind(user.role.map(|r| r.as_str()))
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("insert user", e))?;

        Ok(())
    }

    /// Replace a user's role
    ///
    /// # Returns
    /// * `Ok(true)` - Role updated
    /// * `Ok(false)` - No such user
    pub async fn set_role(&self, id: Uuid, role: Option<Role>) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE users SET role = ?, updated_at = ? WHERE id = ?")
            .bind(role.map(|r| r.as_str()))
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("update user role", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let provider: String = row
            .try_get("provider")
            .map_err(|e| DomainError::internal(format!("Failed to get provider: {}", e)))?;
        let role: Option<String> = row
            .try_get("role")
            .map_err(|e| DomainError::internal(format!("Failed to get role: {}", e)))?;

        // An unrecognised role is treated as no role
        let role = role.and_then(|r| match r.parse::<Role>() {
            Ok(role) => Some(role),
            Err(e) => {
                tracing::warn!(user_id = %id, error = %e, "Ignoring unknown role");
                None
            }
        });

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            provider: provider
                .parse::<AuthProvider>()
                .map_err(DomainError::internal)?,
            social_id: row
                .try_get("social_id")
                .map_err(|e| DomainError::internal(format!("Failed to get social_id: {}", e)))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::internal(format!("Failed to get first_name: {}", e)))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| DomainError::internal(format!("Failed to get last_name: {}", e)))?,
            role,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    async fn fetch_one_where(
        &self,
        operation: &str,
        condition: &str,
        binds: &[&str],
    ) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE {} LIMIT 1", USER_COLUMNS, condition);

        let mut q = sqlx::query(&query);
        for value in binds {
            q = q.bind(*value);
        }

        let result = q
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error(operation, e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let id = id.to_string();
        self.fetch_one_where("find user by id", "id = ?", &[id.as_str()]).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = email.to_lowercase();
        self.fetch_one_where("find user by email", "LOWER(email) = ?", &[email.as_str()])
            .await
    }

    async fn find_by_social_id(
        &self,
        provider: AuthProvider,
        social_id: &str,
    ) -> Result<Option<User>, DomainError> {
        self.fetch_one_where(
            "find user by social id",
            "provider = ? AND social_id = ?",
            &[provider.as_str(), social_id],
        )
        .await
    }
}
