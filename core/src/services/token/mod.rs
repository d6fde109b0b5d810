//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Signing and verifying access and refresh tokens under separate secrets
//! - Generating the per-issue rotation hash
//! - Issuing a session-bound token pair

mod config;
mod hash_generator;
mod issuer;
mod signer;

#[cfg(test)]
pub mod mock;


pub use config::TokenServiceConfig;
pub use hash_generator::{RotationHashGenerator, SecureHashGenerator, ROTATION_HASH_LENGTH};
pub use issuer::TokenIssuer;
pub use signer::TokenSigner;
