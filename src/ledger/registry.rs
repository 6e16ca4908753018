//! Ledger registry
//!
//! The deployment collaborator: derives a deterministic identifier, invokes
//! ledger construction exactly once per identifier, and provides lookups.

use crate::crypto::sha256;
use crate::ledger::account::Address;
use crate::ledger::ledger::{ApprovalEvent, Ledger, LedgerError, TokenMetadata, TransferEvent};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Registry-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("Ledger already exists: {0}")]
    LedgerExists(Address),
    #[error("Ledger not found: {0}")]
    LedgerNotFound(Address),
}

/// Holds all deployed ledgers, keyed by derived identifier
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Registry {
    /// All ledgers by identifier
    ledgers: HashMap<Address, Ledger>,
    /// Deployment counter for identifier derivation
    nonce: u64,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            ledgers: HashMap::new(),
            nonce: 0,
        }
    }

    /// Deploy a new ledger
    ///
    /// The full supply is credited to the deployer. Returns the derived
    /// ledger identifier.
    pub fn deploy(
        &mut self,
        name: String,
        symbol: String,
        decimals: u8,
        initial_supply: u128,
        deployer: Address,
    ) -> Result<Address, RegistryError> {
        // Validates name, symbol, and decimals
        let metadata = TokenMetadata::new(name, symbol, decimals)?;

        let id = self.derive_id(deployer, &metadata.symbol);
        self.nonce += 1;

        if self.ledgers.contains_key(&id) {
            return Err(RegistryError::LedgerExists(id));
        }

        let ledger = Ledger::new(metadata, initial_supply, deployer)?;

        log::info!(
            "Ledger deployed: {} ({}) at {}",
            ledger.name(),
            ledger.symbol(),
            id
        );

        self.ledgers.insert(id, ledger);

        Ok(id)
    }

    /// Derive a ledger identifier from deployer, symbol, and nonce
    fn derive_id(&self, deployer: Address, symbol: &str) -> Address {
        let input = format!("{}:{}:{}", deployer, symbol, self.nonce);
        Address::from_digest(&sha256(input.as_bytes()))
    }

    /// Get a ledger by identifier
    pub fn get(&self, id: Address) -> Option<&Ledger> {
        self.ledgers.get(&id)
    }

    /// Get a mutable reference to a ledger
    pub fn get_mut(&mut self, id: Address) -> Option<&mut Ledger> {
        self.ledgers.get_mut(&id)
    }

    /// List all deployed ledgers
    pub fn list(&self) -> Vec<(Address, &Ledger)> {
        self.ledgers.iter().map(|(&id, ledger)| (id, ledger)).collect()
    }

    /// Get deployed ledger count
    pub fn count(&self) -> usize {
        self.ledgers.len()
    }

    /// Check if a ledger exists
    pub fn exists(&self, id: Address) -> bool {
        self.ledgers.contains_key(&id)
    }

    /// Transfer tokens on a deployed ledger
    pub fn transfer(
        &mut self,
        id: Address,
        caller: Address,
        to: Address,
        amount: u128,
    ) -> Result<TransferEvent, RegistryError> {
        let ledger = self
            .ledgers
            .get_mut(&id)
            .ok_or(RegistryError::LedgerNotFound(id))?;

        Ok(ledger.transfer(caller, to, amount)?)
    }

    /// Approve a spender on a deployed ledger
    pub fn approve(
        &mut self,
        id: Address,
        caller: Address,
        spender: Address,
        amount: u128,
    ) -> Result<ApprovalEvent, RegistryError> {
        let ledger = self
            .ledgers
            .get_mut(&id)
            .ok_or(RegistryError::LedgerNotFound(id))?;

        Ok(ledger.approve(caller, spender, amount)?)
    }

    /// Delegated transfer on a deployed ledger
    pub fn transfer_from(
        &mut self,
        id: Address,
        caller: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<TransferEvent, RegistryError> {
        let ledger = self
            .ledgers
            .get_mut(&id)
            .ok_or(RegistryError::LedgerNotFound(id))?;

        Ok(ledger.transfer_from(caller, from, to, amount)?)
    }

    /// Get a holder's balance on a deployed ledger
    pub fn balance_of(&self, id: Address, holder: Address) -> Result<u128, RegistryError> {
        let ledger = self.ledgers.get(&id).ok_or(RegistryError::LedgerNotFound(id))?;

        Ok(ledger.balance_of(holder))
    }

    /// Get an allowance on a deployed ledger
    pub fn allowance(
        &self,
        id: Address,
        owner: Address,
        spender: Address,
    ) -> Result<u128, RegistryError> {
        let ledger = self.ledgers.get(&id).ok_or(RegistryError::LedgerNotFound(id))?;

        Ok(ledger.allowance(owner, spender))
    }
}
