//! Token-Ledger: a fixed-supply fungible token ledger in Rust
//!
//! This crate provides the canonical fungible-token bookkeeping engine:
//! - Per-holder balances with conservation of a fixed total supply
//! - Per-(owner, spender) allowances with an unlimited-allowance sentinel
//! - Transfer, approve, and delegated-transfer operations with typed errors
//! - Transfer/Approval notifications returned from every mutating operation
//! - A deployment registry with deterministic ledger identifiers
//! - JSON persistence for registry snapshots
//!
//! # Example
//!
//! ```rust
//! use token_ledger::{Address, Ledger, TokenMetadata};
//!
//! let holder = Address::new([0x11; 20]);
//! let recipient = Address::new([0x22; 20]);
//!
//! // Create a ledger with the full supply credited to one holder
//! let metadata = TokenMetadata::new("My Token".to_string(), "MTK".to_string(), 18).unwrap();
//! let mut ledger = Ledger::new(metadata, 1_000_000, holder).unwrap();
//!
//! // Move tokens
//! let event = ledger.transfer(holder, recipient, 250).unwrap();
//! println!("Transferred {} from {} to {}", event.amount, event.from, event.to);
//!
//! // Check balances
//! assert_eq!(ledger.balance_of(holder), 999_750);
//! assert_eq!(ledger.balance_of(recipient), 250);
//! ```

pub mod crypto;
pub mod ledger;
pub mod storage;

// Re-export commonly used types
pub use ledger::{
    Address, AddressError, ApprovalEvent, Ledger, LedgerError, Registry, RegistryError,
    TokenMetadata, TransferEvent, UNLIMITED_ALLOWANCE,
};
pub use storage::{Storage, StorageConfig, StorageError};
