//! Omnichain DeploymentRouter Contract
//!
//! Sells remote token deployments. A caller names the destination chains
//! and the token's construction parameters; the contract prices each chain
//! at its configured deploy gas limit, checks the attached payment covers
//! the total, and forwards one paid `Deploy` operation per chain through
//! the MasterRouter. Any surplus is refunded in the same transaction.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
