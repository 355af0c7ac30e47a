//! Error Types for ActionPoints
//!
//! Every rejected call surfaces one of these variants. Errors are detected
//! before any state is touched, so a rejection never leaves partial writes.

use thiserror::Error;

use crate::types::{address_hex, Address, Amount};

/// Result type alias for ActionPoints operations
pub type ApResult<T> = Result<T, ApError>;

/// Main error enum for all ActionPoints errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApError {
    // ============ Authorization Errors ============
    /// Caller is not the current owner, or ownership was renounced
    #[error("caller {} is not the owner", address_hex(caller))]
    Unauthorized { caller: Address },

    // ============ Balance Errors ============
    /// Debit exceeds the holder's balance
    #[error("insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance { available: Amount, requested: Amount },

    /// Delegated transfer exceeds the granted allowance
    #[error("insufficient allowance: available {available}, requested {requested}")]
    InsufficientAllowance { available: Amount, requested: Amount },

    // ============ Address Errors ============
    /// Target of a transfer or mint is the null address
    #[error("recipient is the zero address")]
    InvalidRecipient,

    /// Caller of a transfer or approval is the null address
    #[error("sender is the zero address")]
    InvalidSender,

    /// Spender of an approval is the null address
    #[error("spender is the zero address")]
    InvalidSpender,

    /// New owner is the null address (use renounce instead)
    #[error("new owner is the zero address")]
    InvalidOwner,

    // ============ Math Errors ============
    /// Arithmetic overflow occurred
    #[error("arithmetic overflow")]
    Overflow,

    // ============ State Errors ============
    /// Total supply no longer matches the sum of balances
    #[error("conservation violated: total supply {total_supply}, balance sum {balance_sum}")]
    ConservationViolated { total_supply: Amount, balance_sum: Amount },

    /// Encoded call could not be decoded
    #[error("invalid call encoding: {reason}")]
    InvalidCallEncoding { reason: &'static str },

    /// State snapshot could not be decoded
    #[error("invalid state snapshot: {reason}")]
    InvalidSnapshot { reason: &'static str },
}

impl ApError {
    /// Returns a human-readable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "E001_UNAUTHORIZED",
            Self::InsufficientBalance { .. } => "E010_INSUFFICIENT_BALANCE",
            Self::InsufficientAllowance { .. } => "E011_INSUFFICIENT_ALLOWANCE",
            Self::InvalidRecipient => "E020_INVALID_RECIPIENT",
            Self::InvalidSender => "E021_INVALID_SENDER",
            Self::InvalidSpender => "E022_INVALID_SPENDER",
            Self::InvalidOwner => "E023_INVALID_OWNER",
            Self::Overflow => "E030_OVERFLOW",
            Self::ConservationViolated { .. } => "E040_CONSERVATION",
            Self::InvalidCallEncoding { .. } => "E050_INVALID_CALL",
            Self::InvalidSnapshot { .. } => "E051_INVALID_SNAPSHOT",
        }
    }

    /// Returns true if this error is recoverable (caller can fix it)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InsufficientBalance { .. } => true,   // Top up balance
            Self::InsufficientAllowance { .. } => true, // Request higher allowance
            Self::InvalidRecipient => true,             // Pick another recipient
            Self::InvalidSpender => true,
            Self::InvalidOwner => true,
            Self::InvalidCallEncoding { .. } => true,
            _ => false,
        }
    }
}
