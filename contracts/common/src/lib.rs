//! ActionPoints Common Library
//!
//! Shared types, constants, errors and events for the ActionPoints token.
//!
//! ## Layout
//!
//! - **Types**: addresses, amounts and the null sentinel
//! - **Errors**: typed rejection reasons with stable codes
//! - **Events**: `Transfer`, `Approval`, `APTokensAllocated` and
//!   `OwnershipTransferred` notifications plus an append-only event log
//! - **Math**: checked arithmetic that fails closed
//! - **Access Control**: single-owner authority with transfer and renounce
//!
//! This crate is `no_std` compatible for WASM compilation when built
//! without the `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-export Vec for submodules based on feature
#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;
#[cfg(feature = "std")]
pub use std::vec::Vec;

pub mod constants;
pub mod errors;
pub mod types;
pub mod math;
pub mod events;
pub mod access_control;

// Re-exports for convenience
pub use constants::*;
pub use errors::*;
pub use types::*;
pub use math::*;
pub use events::*;
pub use access_control::*;
