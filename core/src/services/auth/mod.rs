//! Authentication service module
//!
//! This module provides the session-bound token lifecycle:
//! - Login and social login on top of an external credential check
//! - Refresh with hash rotation and replay rejection
//! - Logout of one session or of every session of a user
//! - Access token verification for request authentication

mod service;
mod stage;
mod traits;

#[cfg(test)]
mod tests;

pub use service::AuthenticationService;
pub use stage::RefreshStage;
pub use traits::LoginValidator;
