//! Domain entities representing core business objects.

pub mod session;
pub mod token;
pub mod user;


// Re-export commonly used types
pub use session::{Session, SessionUpdate};
pub use token::{AccessClaims, IssuedTokens, RefreshClaims, SignedToken, TokenKind};
pub use user::{AuthProvider, Role, SocialProfile, User};
