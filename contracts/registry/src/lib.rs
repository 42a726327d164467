//! Omnichain Registry Contract
//!
//! Single source of truth for the omnichain router network on one chain:
//!
//! - which remote chains participate, their remote MasterRouter address,
//!   native-token precision and whether they are active
//! - which token programs are registered on each chain
//! - the shared role table other contracts query through `HasRole`
//!
//! Every mutating message checks its role before writing, so a rejected
//! call leaves storage untouched.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
