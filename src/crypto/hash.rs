//! Cryptographic hashing utilities
//!
//! Provides SHA-256 based hashing used for ledger identifier derivation.

use sha2::{Digest, Sha256};

/// Computes the SHA-256 digest of the input data
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Computes the SHA-256 digest and returns it as a hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}
