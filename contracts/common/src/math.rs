//! Checked Arithmetic
//!
//! Balances, allowances and supply counters are fixed-width, so every
//! addition goes through these helpers and fails closed. Subtractions are
//! only performed after a bounds check against the current value.

use crate::errors::{ApError, ApResult};
use crate::types::Amount;

/// Add two amounts, rejecting on overflow
#[inline]
pub fn safe_add(a: Amount, b: Amount) -> ApResult<Amount> {
    a.checked_add(b).ok_or(ApError::Overflow)
}

/// Sum a sequence of amounts, rejecting on overflow
pub fn checked_sum<I>(amounts: I) -> ApResult<Amount>
where
    I: IntoIterator<Item = Amount>,
{
    amounts.into_iter().try_fold(0, safe_add)
}

/// Split a base-unit amount into whole tokens and the fractional remainder
pub fn format_amount(amount: Amount) -> (Amount, Amount) {
    use crate::constants::token::ONE;
    (amount / ONE, amount % ONE)
}
