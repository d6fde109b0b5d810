//! MySQL repository implementations

mod session_repository_impl;
mod user_repository_impl;

pub use session_repository_impl::MySqlSessionRepository;
pub use user_repository_impl::MySqlUserRepository;

use kt_core::errors::DomainError;

/// Wrap a driver error with the failing operation
pub(crate) fn db_error(operation: &str, err: sqlx::Error) -> DomainError {
    tracing::error!(operation, error = %err, "Database operation failed");
    DomainError::internal(format!("Failed to {}: {}", operation, err))
}
