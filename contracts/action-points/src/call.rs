//! Call Boundary
//!
//! Encoded calls into the contract. A [`Call`] names one read or write
//! operation with its arguments; [`execute`] applies it for a caller in a
//! fresh [`CallContext`] and hands back either the read value or the
//! events the write produced.
//!
//! ## Operations
//!
//! - **Ledger writes**: transfer, approve, transfer_from, allowance adjustments
//! - **Owner writes**: direct_mint, allocate_coins, ownership changes
//! - **Reads**: balance_of, total_supply, allowance, owner, allocated_supply

use borsh::{BorshDeserialize, BorshSerialize};
use log::debug;
use serde::{Deserialize, Serialize};

use action_points_common::{address_hex, Address, Amount, ApError, ApEvent, ApResult};

use crate::{ActionPoints, CallContext};

/// One contract call with its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum Call {
    Transfer { to: Address, amount: Amount },
    Approve { spender: Address, amount: Amount },
    TransferFrom { from: Address, to: Address, amount: Amount },
    IncreaseAllowance { spender: Address, added: Amount },
    DecreaseAllowance { spender: Address, subtracted: Amount },
    DirectMint { to: Address, amount: Amount },
    AllocateCoins { amount: Amount },
    TransferOwnership { new_owner: Address },
    RenounceOwnership,
    BalanceOf { account: Address },
    TotalSupply,
    Allowance { owner: Address, spender: Address },
    Owner,
    AllocatedSupply,
}

/// Result of a successful call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A write was applied; these events were emitted
    Applied(Vec<ApEvent>),
    /// An amount read
    Value(Amount),
    /// The current owner, `None` after renounce
    Owner(Option<Address>),
}

impl Call {
    /// Decode a call from CBOR bytes
    ///
    /// The buffer must hold exactly one call.
    pub fn from_cbor(bytes: &[u8]) -> ApResult<Self> {
        let mut cursor = bytes;
        let call: Self = ciborium::from_reader(&mut cursor).map_err(|_| ApError::InvalidCallEncoding {
            reason: "malformed CBOR call",
        })?;
        if !cursor.is_empty() {
            return Err(ApError::InvalidCallEncoding {
                reason: "trailing bytes after call",
            });
        }
        Ok(call)
    }

    /// Encode this call as CBOR bytes
    pub fn to_cbor(&self) -> ApResult<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).map_err(|_| ApError::InvalidCallEncoding {
            reason: "call not encodable",
        })?;
        Ok(buf)
    }

    /// Reads never change state or emit events
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Call::BalanceOf { .. }
                | Call::TotalSupply
                | Call::Allowance { .. }
                | Call::Owner
                | Call::AllocatedSupply
        )
    }

    /// Operations restricted to the current owner
    pub fn requires_owner(&self) -> bool {
        matches!(
            self,
            Call::DirectMint { .. }
                | Call::AllocateCoins { .. }
                | Call::TransferOwnership { .. }
                | Call::RenounceOwnership
        )
    }

    /// Operation name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Call::Transfer { .. } => "transfer",
            Call::Approve { .. } => "approve",
            Call::TransferFrom { .. } => "transfer_from",
            Call::IncreaseAllowance { .. } => "increase_allowance",
            Call::DecreaseAllowance { .. } => "decrease_allowance",
            Call::DirectMint { .. } => "direct_mint",
            Call::AllocateCoins { .. } => "allocate_coins",
            Call::TransferOwnership { .. } => "transfer_ownership",
            Call::RenounceOwnership => "renounce_ownership",
            Call::BalanceOf { .. } => "balance_of",
            Call::TotalSupply => "total_supply",
            Call::Allowance { .. } => "allowance",
            Call::Owner => "owner",
            Call::AllocatedSupply => "allocated_supply",
        }
    }
}

/// Apply one call on behalf of `caller`
pub fn execute(contract: &mut ActionPoints, caller: Address, call: &Call) -> ApResult<Outcome> {
    let mut ctx = CallContext::new(caller);

    let applied = match *call {
        Call::Transfer { to, amount } => contract.transfer(&mut ctx, to, amount),
        Call::Approve { spender, amount } => contract.approve(&mut ctx, spender, amount),
        Call::TransferFrom { from, to, amount } => contract.transfer_from(&mut ctx, from, to, amount),
        Call::IncreaseAllowance { spender, added } => {
            contract.increase_allowance(&mut ctx, spender, added)
        }
        Call::DecreaseAllowance { spender, subtracted } => {
            contract.decrease_allowance(&mut ctx, spender, subtracted)
        }
        Call::DirectMint { to, amount } => contract.direct_mint(&mut ctx, to, amount),
        Call::AllocateCoins { amount } => contract.allocate_coins(&mut ctx, amount),
        Call::TransferOwnership { new_owner } => contract.transfer_ownership(&mut ctx, new_owner),
        Call::RenounceOwnership => contract.renounce_ownership(&mut ctx),
        Call::BalanceOf { account } => return Ok(Outcome::Value(contract.balance_of(&account))),
        Call::TotalSupply => return Ok(Outcome::Value(contract.total_supply())),
        Call::Allowance { owner, spender } => {
            return Ok(Outcome::Value(contract.allowance(&owner, &spender)))
        }
        Call::Owner => return Ok(Outcome::Owner(contract.owner())),
        Call::AllocatedSupply => return Ok(Outcome::Value(contract.allocated_supply())),
    };

    match applied {
        Ok(()) => Ok(Outcome::Applied(ctx.events.into_events())),
        Err(e) => {
            debug!(
                "{} by {} rejected with {}: {}",
                call.name(),
                address_hex(&caller),
                e.code(),
                e
            );
            Err(e)
        }
    }
}

/// Decode a CBOR call and apply it on behalf of `caller`
pub fn execute_encoded(contract: &mut ActionPoints, caller: Address, bytes: &[u8]) -> ApResult<Outcome> {
    let call = Call::from_cbor(bytes)?;
    execute(contract, caller, &call)
}
