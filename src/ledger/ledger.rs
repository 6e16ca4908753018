//! Fixed-supply fungible token ledger
//!
//! Per-holder balances and per-(owner, spender) allowances with standard
//! transfer semantics. The entire supply is credited to one holder at
//! construction and the sum of balances equals the total supply in every
//! reachable state.

use crate::ledger::account::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Allowance value that is never decremented by `transfer_from`
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

/// Number of transfer events retained in history
const HISTORY_LIMIT: usize = 100;

/// Ledger-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid receiver: the null address cannot receive tokens")]
    InvalidReceiver,
    #[error("Invalid spender: the null address cannot be approved")]
    InvalidSpender,
    #[error("Insufficient balance for {account}: have {available}, need {requested}")]
    InsufficientBalance {
        account: Address,
        available: u128,
        requested: u128,
    },
    #[error("Insufficient allowance for {spender}: have {available}, need {requested}")]
    InsufficientAllowance {
        spender: Address,
        available: u128,
        requested: u128,
    },
    #[error("Invalid name: must be 1-50 characters")]
    InvalidName,
    #[error("Invalid symbol: must be 1-10 characters")]
    InvalidSymbol,
    #[error("Invalid decimals: must be 0-18")]
    InvalidDecimals,
}

/// Token metadata (immutable after construction)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenMetadata {
    /// Token name (e.g., "My Token")
    pub name: String,
    /// Token symbol (e.g., "MTK")
    pub symbol: String,
    /// Decimal places (usually 18)
    pub decimals: u8,
}

impl TokenMetadata {
    /// Create new token metadata with validation
    pub fn new(name: String, symbol: String, decimals: u8) -> Result<Self, LedgerError> {
        if name.is_empty() || name.len() > 50 {
            return Err(LedgerError::InvalidName);
        }

        if symbol.is_empty() || symbol.len() > 10 {
            return Err(LedgerError::InvalidSymbol);
        }

        if decimals > 18 {
            return Err(LedgerError::InvalidDecimals);
        }

        Ok(Self {
            name,
            symbol,
            decimals,
        })
    }
}

/// Transfer notification (emitted when tokens move)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: u128,
    pub timestamp: DateTime<Utc>,
}

/// Approval notification (emitted when an allowance is set)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApprovalEvent {
    pub owner: Address,
    pub spender: Address,
    pub amount: u128,
    pub timestamp: DateTime<Utc>,
}

/// A fixed-supply fungible token ledger
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ledger {
    /// Token metadata
    metadata: TokenMetadata,
    /// Total supply (fixed at construction)
    total_supply: u128,
    /// Balances: address -> amount
    balances: HashMap<Address, u128>,
    /// Allowances: owner -> (spender -> amount)
    allowances: HashMap<Address, HashMap<Address, u128>>,
    /// Transfer history (last 100)
    pub transfer_history: Vec<TransferEvent>,
}

impl Ledger {
    /// Create a new ledger with the full supply credited to one holder
    pub fn new(
        metadata: TokenMetadata,
        initial_supply: u128,
        initial_holder: Address,
    ) -> Result<Self, LedgerError> {
        if initial_holder.is_null() {
            return Err(LedgerError::InvalidReceiver);
        }

        let mut balances = HashMap::new();
        balances.insert(initial_holder, initial_supply);

        Ok(Self {
            metadata,
            total_supply: initial_supply,
            balances,
            allowances: HashMap::new(),
            transfer_history: Vec::new(),
        })
    }

    // =========================================================================
    // View Functions
    // =========================================================================

    /// Get token name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Get token symbol
    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    /// Get decimal places
    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    /// Get total supply
    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Get balance of an address (zero for unknown accounts)
    pub fn balance_of(&self, account: Address) -> u128 {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    /// Get remaining allowance for a spender (zero by default)
    pub fn allowance(&self, owner: Address, spender: Address) -> u128 {
        self.allowances
            .get(&owner)
            .and_then(|spenders| spenders.get(&spender))
            .copied()
            .unwrap_or(0)
    }

    /// Get all holders with non-zero balances
    pub fn holders(&self) -> Vec<(Address, u128)> {
        self.balances
            .iter()
            .filter(|(_, &balance)| balance > 0)
            .map(|(&address, &balance)| (address, balance))
            .collect()
    }

    /// Get holder count
    pub fn holder_count(&self) -> usize {
        self.balances.values().filter(|&&balance| balance > 0).count()
    }

    // =========================================================================
    // Mutating Functions
    // =========================================================================

    /// Transfer tokens from the caller to another address
    ///
    /// Zero-amount and self-transfers succeed; only the null receiver and an
    /// insufficient balance are rejected.
    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: u128,
    ) -> Result<TransferEvent, LedgerError> {
        if to.is_null() {
            return Err(LedgerError::InvalidReceiver);
        }

        let available = self.balance_of(caller);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                account: caller,
                available,
                requested: amount,
            });
        }

        self.move_balance(caller, to, amount);

        Ok(self.record_transfer(caller, to, amount))
    }

    /// Approve a spender to transfer tokens on behalf of the caller
    ///
    /// The allowance is an absolute overwrite (can be 0 to revoke). An
    /// allowance of `UNLIMITED_ALLOWANCE` is never decremented on spend.
    pub fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        amount: u128,
    ) -> Result<ApprovalEvent, LedgerError> {
        if spender.is_null() {
            return Err(LedgerError::InvalidSpender);
        }

        self.allowances
            .entry(caller)
            .or_default()
            .insert(spender, amount);

        Ok(ApprovalEvent {
            owner: caller,
            spender,
            amount,
            timestamp: Utc::now(),
        })
    }

    /// Transfer tokens out of `from` on the strength of a prior approval
    ///
    /// The allowance granted to the caller is checked before the owner's
    /// balance, except when it is `UNLIMITED_ALLOWANCE`, in which case it is
    /// neither checked nor decremented.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<TransferEvent, LedgerError> {
        if to.is_null() {
            return Err(LedgerError::InvalidReceiver);
        }

        let granted = self.allowance(from, caller);
        if granted != UNLIMITED_ALLOWANCE && granted < amount {
            return Err(LedgerError::InsufficientAllowance {
                spender: caller,
                available: granted,
                requested: amount,
            });
        }

        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from,
                available,
                requested: amount,
            });
        }

        if granted != UNLIMITED_ALLOWANCE {
            // checked above, cannot underflow
            self.allowances
                .entry(from)
                .or_default()
                .insert(caller, granted - amount);
        }

        self.move_balance(from, to, amount);

        Ok(self.record_transfer(from, to, amount))
    }

    /// Move an already-validated amount between two accounts
    fn move_balance(&mut self, from: Address, to: Address, amount: u128) {
        *self.balances.entry(from).or_insert(0) -= amount;
        *self.balances.entry(to).or_insert(0) += amount;
    }

    /// Append a transfer to the bounded history and return the event
    fn record_transfer(&mut self, from: Address, to: Address, amount: u128) -> TransferEvent {
        let event = TransferEvent {
            from,
            to,
            amount,
            timestamp: Utc::now(),
        };

        self.transfer_history.push(event.clone());
        if self.transfer_history.len() > HISTORY_LIMIT {
            self.transfer_history.remove(0);
        }

        event
    }
}
