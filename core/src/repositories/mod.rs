//! Collaborator interfaces: the session registry and the user directory.
//!
//! Both are implemented outside this crate (see the `kt_infra` MySQL
//! implementations). In-memory mocks are available to unit tests.

pub mod session;
pub mod user;

pub use session::SessionRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use session::MockSessionRepository;
#[cfg(test)]
pub use user::MockUserRepository;
