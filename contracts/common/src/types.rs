//! Core Types for ActionPoints
//!
//! Fundamental identifiers and helpers used by the ledger and the
//! supply controller.

use crate::constants::ZERO_ADDRESS;

/// Type alias for account addresses (32-byte identifier)
pub type Address = [u8; 32];

/// Token amount in base units (18 decimals)
pub type Amount = u128;

/// Check whether an address is the null sentinel
pub fn is_zero_address(address: &Address) -> bool {
    *address == ZERO_ADDRESS
}

/// Render an address as lowercase hex for logs and error messages
#[cfg(feature = "std")]
pub fn address_hex(address: &Address) -> String {
    hex::encode(address)
}

/// Render an address as lowercase hex for logs and error messages
#[cfg(not(feature = "std"))]
pub fn address_hex(address: &Address) -> alloc::string::String {
    hex::encode(address)
}
