//! Fixed-supply fungible token ledger
//!
//! Provides the standard fungible-token bookkeeping surface:
//! - Balances per address
//! - Allowances for delegated transfers
//! - Transfer, approve, and delegated-transfer operations
//! - A registry that deploys ledgers under derived identifiers
//!
//! # Example
//!
//! ```ignore
//! use token_ledger::ledger::{Address, Registry};
//!
//! let mut registry = Registry::new();
//! let deployer = Address::new([0x11; 20]);
//!
//! // Deploy a new ledger
//! let id = registry.deploy(
//!     "My Token".to_string(),
//!     "MTK".to_string(),
//!     18,
//!     1_000_000_000_000_000_000_000_000, // 1 million with 18 decimals
//!     deployer,
//! ).unwrap();
//!
//! // Transfer tokens
//! let recipient = Address::new([0x22; 20]);
//! registry.transfer(id, deployer, recipient, 1000).unwrap();
//!
//! // Check balance
//! let balance = registry.get(id).unwrap().balance_of(recipient);
//! ```

pub mod account;
pub mod ledger;
pub mod registry;

pub use account::{Address, AddressError};
pub use ledger::{
    ApprovalEvent, Ledger, LedgerError, TokenMetadata, TransferEvent, UNLIMITED_ALLOWANCE,
};
pub use registry::{Registry, RegistryError};
