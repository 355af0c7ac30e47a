//! ActionPoints Token Contract
//!
//! Fungible accounting token with owner-gated issuance.
//!
//! Holders transfer points directly or through allowances. A single owner
//! can mint points to any address and can bump the allocated-supply
//! counter, a bookkeeping value for points earmarked for future
//! distribution that is never reconciled against minted balances.
//!
//! ## Layout
//!
//! - [`ledger`]: balances, allowances and total supply
//! - [`supply`]: owner-only minting, allocation and ownership changes
//! - [`call`]: CBOR-encoded calls and a single dispatch entry point
//!
//! Every state-changing call takes a [`CallContext`] carrying the caller
//! and an [`EventLog`] that receives the emitted notifications.

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};

pub mod call;
pub mod ledger;
pub mod supply;

#[cfg(test)]
mod scenario_tests;

pub use action_points_common::{
    constants::token,
    errors::{ApError, ApResult},
    events::{ApEvent, EventLog, EventType},
    types::{Address, Amount},
    Ownable, ZERO_ADDRESS, UNLIMITED_ALLOWANCE,
};
pub use call::{execute, execute_encoded, Call, Outcome};
pub use ledger::Ledger;

// ============ Call Context ============

/// Per-call environment: who is calling and where events go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    /// Account invoking the operation
    pub caller: Address,
    /// Events emitted by the operation
    pub events: EventLog,
}

impl CallContext {
    pub fn new(caller: Address) -> Self {
        Self {
            caller,
            events: EventLog::new(),
        }
    }
}

// ============ Contract State ============

/// Complete ActionPoints contract state
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ActionPoints {
    /// Balances, allowances and total supply
    ledger: Ledger,
    /// Cumulative allocated supply (only increases)
    allocated_supply: Amount,
    /// Single authority allowed to mint and allocate
    ownable: Ownable,
}

impl ActionPoints {
    /// Deploy a fresh contract owned by `deployer`
    ///
    /// Supply and allocation start at zero.
    pub fn new(deployer: Address) -> ApResult<Self> {
        Ok(Self {
            ledger: Ledger::new(),
            allocated_supply: 0,
            ownable: Ownable::new(deployer)?,
        })
    }

    /// Get token name
    pub fn name() -> &'static str {
        token::NAME
    }

    /// Get token symbol
    pub fn symbol() -> &'static str {
        token::SYMBOL
    }

    /// Get token decimals
    pub fn decimals() -> u8 {
        token::DECIMALS
    }

    // ============ Reads ============

    pub fn balance_of(&self, account: &Address) -> Amount {
        self.ledger.balance_of(account)
    }

    pub fn total_supply(&self) -> Amount {
        self.ledger.total_supply()
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.ledger.allowance(owner, spender)
    }

    /// Current owner, `None` after renounce
    pub fn owner(&self) -> Option<Address> {
        self.ownable.owner()
    }

    pub fn allocated_supply(&self) -> Amount {
        self.allocated_supply
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // ============ Ledger Writes ============

    pub fn transfer(&mut self, ctx: &mut CallContext, to: Address, amount: Amount) -> ApResult<()> {
        self.ledger.transfer(ctx, to, amount)
    }

    pub fn approve(&mut self, ctx: &mut CallContext, spender: Address, amount: Amount) -> ApResult<()> {
        self.ledger.approve(ctx, spender, amount)
    }

    pub fn transfer_from(
        &mut self,
        ctx: &mut CallContext,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> ApResult<()> {
        self.ledger.transfer_from(ctx, from, to, amount)
    }

    pub fn increase_allowance(
        &mut self,
        ctx: &mut CallContext,
        spender: Address,
        added: Amount,
    ) -> ApResult<()> {
        self.ledger.increase_allowance(ctx, spender, added)
    }

    pub fn decrease_allowance(
        &mut self,
        ctx: &mut CallContext,
        spender: Address,
        subtracted: Amount,
    ) -> ApResult<()> {
        self.ledger.decrease_allowance(ctx, spender, subtracted)
    }

    // ============ Snapshot & Integrity ============

    /// Serialize the full state
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Restore state from a snapshot produced by [`ActionPoints::to_bytes`]
    ///
    /// Snapshots whose total supply disagrees with their balances are rejected.
    pub fn from_bytes(bytes: &[u8]) -> ApResult<Self> {
        let state: Self = borsh::from_slice(bytes).map_err(|_| ApError::InvalidSnapshot {
            reason: "malformed state snapshot",
        })?;
        state.check_invariants()?;
        Ok(state)
    }

    /// SHA-256 commitment over the serialized state
    pub fn state_hash(&self) -> [u8; 32] {
        let digest = Sha256::digest(self.to_bytes());
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&digest);
        hash
    }

    /// Verify that total supply equals the sum of all balances
    pub fn check_invariants(&self) -> ApResult<()> {
        let total_supply = self.ledger.total_supply();
        let balance_sum = self.ledger.balance_sum()?;
        if balance_sum != total_supply {
            return Err(ApError::ConservationViolated {
                total_supply,
                balance_sum,
            });
        }
        Ok(())
    }
}

/// Format amount for display as whole and fractional parts
pub fn format_amount(amount: Amount) -> (Amount, Amount) {
    action_points_common::format_amount(amount)
}

// ============ Tests ============
