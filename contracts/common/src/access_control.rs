//! Access Control Module
//!
//! Single-owner authority for the ActionPoints supply controller.
//!
//! ## Key Features
//!
//! - **Single Authority**: at most one owner at any time
//! - **Explicit State**: the owner is an `Option<Address>` checked at call time
//! - **Transfer**: the owner can hand authority to another non-null address
//! - **Renounce**: clearing the owner is final; owner-only calls then fail forever

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::ZERO_ADDRESS;
use crate::errors::{ApError, ApResult};
use crate::events::ApEvent;
use crate::types::{is_zero_address, Address};

/// Ownership state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Ownable {
    owner: Option<Address>,
}

impl Ownable {
    /// Create ownership state held by `owner`
    pub fn new(owner: Address) -> ApResult<Self> {
        if is_zero_address(&owner) {
            return Err(ApError::InvalidOwner);
        }
        Ok(Self { owner: Some(owner) })
    }

    /// Current owner, `None` once renounced
    pub fn owner(&self) -> Option<Address> {
        self.owner
    }

    /// Check whether `caller` is the current owner
    pub fn is_owner(&self, caller: &Address) -> bool {
        self.owner.as_ref() == Some(caller)
    }

    /// Reject unless `caller` is the current owner
    pub fn only_owner(&self, caller: &Address) -> ApResult<()> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            Err(ApError::Unauthorized { caller: *caller })
        }
    }

    /// Hand ownership to `new_owner`
    ///
    /// Returns the `OwnershipTransferred` event to emit.
    pub fn transfer_ownership(&mut self, caller: &Address, new_owner: Address) -> ApResult<ApEvent> {
        self.only_owner(caller)?;
        if is_zero_address(&new_owner) {
            return Err(ApError::InvalidOwner);
        }

        self.owner = Some(new_owner);
        Ok(ApEvent::OwnershipTransferred {
            previous_owner: *caller,
            new_owner,
        })
    }

    /// Give up ownership permanently
    pub fn renounce_ownership(&mut self, caller: &Address) -> ApResult<ApEvent> {
        self.only_owner(caller)?;

        self.owner = None;
        Ok(ApEvent::OwnershipTransferred {
            previous_owner: *caller,
            new_owner: ZERO_ADDRESS,
        })
    }
}
