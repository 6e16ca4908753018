//! Cryptographic utilities for the ledger
//!
//! This module provides:
//! - SHA-256 hashing for identifier derivation

pub mod hash;

pub use hash::{sha256, sha256_hex};
