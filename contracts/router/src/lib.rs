//! Omnichain Router Contract
//!
//! Applies one decoded cross-chain operation on behalf of the MasterRouter.
//! Each operation kind is forwarded to its target (token program, bank,
//! factory) as a submessage capped at the configured gas ceiling for that
//! kind. Downstream failures are caught in `reply` and reported through an
//! `ExecutionResult` instead of reverting the caller.
//!
//! ## Lifecycle
//!
//! ```text
//! Pending -> Executing -> Completed
//!                      -> Failed
//! ```
//!
//! Operations that cannot even be dispatched (bad recipient, no factory)
//! go straight from `Pending` to `Failed`.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
