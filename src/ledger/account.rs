//! Account identifiers
//!
//! An account is a 20-byte opaque value rendered as `0x`-prefixed lowercase
//! hex. The all-zero address is reserved: it can never hold funds, receive
//! transfers, or be approved as a spender.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Byte width of an account identifier
pub const ADDRESS_LEN: usize = 20;

/// Address parsing errors
#[derive(Error, Debug, PartialEq)]
pub enum AddressError {
    #[error("Invalid address length: expected 40 hex characters, got {0}")]
    InvalidLength(usize),
    #[error("Invalid hex in address: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A fixed-width account identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The reserved null address (all zero bytes)
    pub const NULL: Address = Address([0u8; ADDRESS_LEN]);

    /// Create an address from raw bytes
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    /// Build an address from the leading bytes of a SHA-256 digest
    pub fn from_digest(digest: &[u8; 32]) -> Self {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&digest[..ADDRESS_LEN]);
        Address(bytes)
    }

    /// Whether this is the reserved null address
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Raw bytes of the address
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parses `0x`-prefixed or bare 40-character hex
    fn from_str(s: &str) -> Result<Self, AddressError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() != ADDRESS_LEN * 2 {
            return Err(AddressError::InvalidLength(digits.len()));
        }
        let decoded = hex::decode(digits)?;
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Address(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
