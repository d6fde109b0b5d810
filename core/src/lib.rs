//! # Keyturn Core
//!
//! Session-bound access and refresh token lifecycle.
//! This crate contains the domain entities, the error taxonomy, the
//! collaborator traits for user and session storage, and the services that
//! issue, rotate and revoke tokens.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    AccessClaims, AuthProvider, IssuedTokens, RefreshClaims, Role, Session, SessionUpdate,
    SignedToken, SocialProfile, TokenKind, User,
};
pub use domain::value_objects::{LoginResponse, RefreshResponse};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{SessionRepository, UserRepository};
pub use services::{AuthenticationService, LoginValidator, TokenIssuer, TokenServiceConfig};
