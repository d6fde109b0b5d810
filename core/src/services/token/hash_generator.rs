//! Rotation hash generation
//!
//! Every issue produces a fresh hash that is embedded in the refresh token
//! and stored on the session. The generator is injected so tests can make
//! it deterministic.

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 digest
pub const ROTATION_HASH_LENGTH: usize = 64;

/// Produces unguessable rotation hashes
pub trait RotationHashGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// SHA-256 over 32 bytes from the OS random source, hex encoded
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureHashGenerator;

impl RotationHashGenerator for SecureHashGenerator {
    fn generate(&self) -> String {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        hex::encode(Sha256::digest(seed))
    }
}
