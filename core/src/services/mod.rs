//! Business services containing domain logic and use cases.

pub mod auth;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthenticationService, LoginValidator, RefreshStage};
pub use token::{
    RotationHashGenerator, SecureHashGenerator, TokenIssuer, TokenServiceConfig, TokenSigner,
    ROTATION_HASH_LENGTH,
};
