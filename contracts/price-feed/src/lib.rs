//! Omnichain PriceFeed Contract
//!
//! Stores destination-chain gas prices packed four to a 256-bit word and
//! converts them into fees payable in this chain's native token.
//!
//! Prices are written by `Provider` role holders one group (word) at a time;
//! chain-to-slot assignments are configured by `Admin`.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod pricing;
mod query;
pub mod state;

pub use crate::error::ContractError;
