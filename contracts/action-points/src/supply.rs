//! Authority-Gated Supply Controller
//!
//! Owner-only operations: direct minting, allocated-supply bookkeeping and
//! ownership changes. Authority is checked at call time against the
//! current owner; after a renounce every operation here is rejected.

use log::{debug, warn};

use action_points_common::{address_hex, safe_add, Address, Amount, ApEvent, ApResult};

use crate::{ActionPoints, CallContext};

impl ActionPoints {
    /// Mint `amount` new points straight to `to`
    ///
    /// Emits `Transfer` from the zero address.
    pub fn direct_mint(&mut self, ctx: &mut CallContext, to: Address, amount: Amount) -> ApResult<()> {
        self.require_owner(ctx, "direct_mint")?;
        self.ledger.mint(ctx, to, amount)
    }

    /// Add `amount` to the allocated-supply counter
    ///
    /// No balance changes. Emits `APTokensAllocated` with the new cumulative
    /// value.
    pub fn allocate_coins(&mut self, ctx: &mut CallContext, amount: Amount) -> ApResult<()> {
        self.require_owner(ctx, "allocate_coins")?;

        let currently_allocated = safe_add(self.allocated_supply, amount)?;
        self.allocated_supply = currently_allocated;

        debug!("allocated {} (total {})", amount, currently_allocated);
        ctx.events.emit(ApEvent::APTokensAllocated { currently_allocated });
        Ok(())
    }

    /// Hand authority to `new_owner`
    pub fn transfer_ownership(&mut self, ctx: &mut CallContext, new_owner: Address) -> ApResult<()> {
        let event = self
            .ownable
            .transfer_ownership(&ctx.caller, new_owner)
            .inspect_err(|e| warn!("transfer_ownership rejected: {}", e))?;

        debug!(
            "ownership transferred {} -> {}",
            address_hex(&ctx.caller),
            address_hex(&new_owner)
        );
        ctx.events.emit(event);
        Ok(())
    }

    /// Give up authority for good
    pub fn renounce_ownership(&mut self, ctx: &mut CallContext) -> ApResult<()> {
        let event = self
            .ownable
            .renounce_ownership(&ctx.caller)
            .inspect_err(|e| warn!("renounce_ownership rejected: {}", e))?;

        debug!("ownership renounced by {}", address_hex(&ctx.caller));
        ctx.events.emit(event);
        Ok(())
    }

    fn require_owner(&self, ctx: &CallContext, operation: &str) -> ApResult<()> {
        self.ownable
            .only_owner(&ctx.caller)
            .inspect_err(|e| warn!("{} rejected: {}", operation, e))
    }
}
