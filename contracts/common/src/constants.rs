//! Token Constants
//!
//! Metadata and sentinel values for the ActionPoints token.

use crate::types::{Address, Amount};

/// Token Metadata
pub mod token {
    use crate::types::Amount;

    /// Token name
    pub const NAME: &str = "ActionPoints";
    /// Token symbol
    pub const SYMBOL: &str = "AP";
    /// Decimal places
    pub const DECIMALS: u8 = 18;
    /// One unit with decimals (1 AP = 10^18 base units)
    pub const ONE: Amount = 1_000_000_000_000_000_000;
}

/// The null address. Source of minted supply in `Transfer` events and
/// never a valid recipient, spender or owner.
pub const ZERO_ADDRESS: Address = [0u8; 32];

/// Allowance value that `transfer_from` never decrements
pub const UNLIMITED_ALLOWANCE: Amount = Amount::MAX;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_matches_decimals() {
        assert_eq!(token::ONE, 10u128.pow(token::DECIMALS as u32));
    }
}
