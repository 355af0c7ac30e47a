//! Ledger Core
//!
//! Balances, total supply and allowances. Every write validates all of its
//! preconditions and computes every new value before touching state, so a
//! rejected call leaves the ledger exactly as it was.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use log::debug;

use action_points_common::{
    address_hex, checked_sum, is_zero_address, safe_add, Address, Amount, ApError,
    ApEvent, ApResult, ZERO_ADDRESS, UNLIMITED_ALLOWANCE,
};

use crate::CallContext;

/// Balances, allowances and total supply
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Ledger {
    /// Holder balances; zero balances are pruned
    balances: BTreeMap<Address, Amount>,
    /// Allowances keyed by (owner, spender); zero allowances are pruned
    allowances: BTreeMap<(Address, Address), Amount>,
    /// Sum of all balances
    total_supply: Amount,
}

/// Balances after a validated move, ready to be written
struct PendingMove {
    from_after: Amount,
    to_after: Amount,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    // ============ Queries ============

    /// Balance of `account`, 0 for unknown accounts
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Total supply of minted tokens
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Remaining amount `spender` may move on behalf of `owner`, 0 if unset
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    /// Number of accounts holding a non-zero balance
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Recompute the sum of all balances
    pub fn balance_sum(&self) -> ApResult<Amount> {
        checked_sum(self.balances.values().copied())
    }

    // ============ Transfers ============

    /// Move `amount` from the caller to `to`
    pub fn transfer(&mut self, ctx: &mut CallContext, to: Address, amount: Amount) -> ApResult<()> {
        let from = ctx.caller;
        if is_zero_address(&from) {
            return Err(ApError::InvalidSender);
        }

        let pending = self.prepare_move(&from, &to, amount)?;
        self.commit_move(&from, &to, pending);

        debug!(
            "transfer {} -> {}: {}",
            address_hex(&from),
            address_hex(&to),
            amount
        );
        ctx.events.emit(ApEvent::Transfer { from, to, value: amount });
        Ok(())
    }

    /// Move `amount` from `from` to `to` using the caller's allowance
    ///
    /// Checks run in order: allowance, balance, recipient. An allowance of
    /// [`UNLIMITED_ALLOWANCE`] is left untouched.
    pub fn transfer_from(
        &mut self,
        ctx: &mut CallContext,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> ApResult<()> {
        let spender = ctx.caller;

        let current = self.allowance(&from, &spender);
        if current < amount {
            return Err(ApError::InsufficientAllowance {
                available: current,
                requested: amount,
            });
        }
        if is_zero_address(&from) {
            return Err(ApError::InvalidSender);
        }

        let pending = self.prepare_move(&from, &to, amount)?;
        let allowance_after = if current == UNLIMITED_ALLOWANCE {
            current
        } else {
            current - amount
        };

        self.set_allowance(from, spender, allowance_after);
        self.commit_move(&from, &to, pending);

        debug!(
            "transfer_from {} -> {} by {}: {} (allowance left {})",
            address_hex(&from),
            address_hex(&to),
            address_hex(&spender),
            amount,
            allowance_after
        );
        ctx.events.emit(ApEvent::Transfer { from, to, value: amount });
        Ok(())
    }

    // ============ Allowances ============

    /// Set the caller's allowance for `spender` to exactly `amount`
    ///
    /// Not checked against the caller's balance.
    pub fn approve(&mut self, ctx: &mut CallContext, spender: Address, amount: Amount) -> ApResult<()> {
        let owner = ctx.caller;
        Self::check_approval_parties(&owner, &spender)?;

        self.set_allowance(owner, spender, amount);

        debug!(
            "approve {} for {}: {}",
            address_hex(&spender),
            address_hex(&owner),
            amount
        );
        ctx.events.emit(ApEvent::Approval { owner, spender, value: amount });
        Ok(())
    }

    /// Raise the caller's allowance for `spender` by `added`
    pub fn increase_allowance(
        &mut self,
        ctx: &mut CallContext,
        spender: Address,
        added: Amount,
    ) -> ApResult<()> {
        let owner = ctx.caller;
        Self::check_approval_parties(&owner, &spender)?;

        let value = safe_add(self.allowance(&owner, &spender), added)?;
        self.set_allowance(owner, spender, value);

        debug!(
            "increase_allowance {} for {}: +{} = {}",
            address_hex(&spender),
            address_hex(&owner),
            added,
            value
        );
        ctx.events.emit(ApEvent::Approval { owner, spender, value });
        Ok(())
    }

    /// Lower the caller's allowance for `spender` by `subtracted`
    pub fn decrease_allowance(
        &mut self,
        ctx: &mut CallContext,
        spender: Address,
        subtracted: Amount,
    ) -> ApResult<()> {
        let owner = ctx.caller;
        Self::check_approval_parties(&owner, &spender)?;

        let current = self.allowance(&owner, &spender);
        if current < subtracted {
            return Err(ApError::InsufficientAllowance {
                available: current,
                requested: subtracted,
            });
        }
        let value = current - subtracted;
        self.set_allowance(owner, spender, value);

        debug!(
            "decrease_allowance {} for {}: -{} = {}",
            address_hex(&spender),
            address_hex(&owner),
            subtracted,
            value
        );
        ctx.events.emit(ApEvent::Approval { owner, spender, value });
        Ok(())
    }

    // ============ Supply ============

    /// Create `amount` new tokens for `to`
    ///
    /// Authorization is the caller's responsibility; see the supply controller.
    pub(crate) fn mint(&mut self, ctx: &mut CallContext, to: Address, amount: Amount) -> ApResult<()> {
        if is_zero_address(&to) {
            return Err(ApError::InvalidRecipient);
        }

        let supply_after = safe_add(self.total_supply, amount)?;
        let balance_after = safe_add(self.balance_of(&to), amount)?;

        self.total_supply = supply_after;
        self.set_balance(to, balance_after);

        debug!("mint {} to {} (supply {})", amount, address_hex(&to), supply_after);
        ctx.events.emit(ApEvent::Transfer {
            from: ZERO_ADDRESS,
            to,
            value: amount,
        });
        Ok(())
    }

    // ============ Internal Helpers ============

    fn check_approval_parties(owner: &Address, spender: &Address) -> ApResult<()> {
        if is_zero_address(owner) {
            return Err(ApError::InvalidSender);
        }
        if is_zero_address(spender) {
            return Err(ApError::InvalidSpender);
        }
        Ok(())
    }

    /// Validate a debit of `from` and credit of `to` without writing
    fn prepare_move(&self, from: &Address, to: &Address, amount: Amount) -> ApResult<PendingMove> {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(ApError::InsufficientBalance {
                available: from_balance,
                requested: amount,
            });
        }
        if is_zero_address(to) {
            return Err(ApError::InvalidRecipient);
        }

        let from_after = from_balance - amount;
        // Self-transfer: the credit lands on the pre-debit balance
        let to_after = if from == to {
            from_balance
        } else {
            safe_add(self.balance_of(to), amount)?
        };

        Ok(PendingMove { from_after, to_after })
    }

    fn commit_move(&mut self, from: &Address, to: &Address, pending: PendingMove) {
        self.set_balance(*from, pending.from_after);
        self.set_balance(*to, pending.to_after);
    }

    fn set_balance(&mut self, account: Address, amount: Amount) {
        if amount == 0 {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, amount);
        }
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount == 0 {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }
}

// ============ Tests ============
