//! Error types for the DeploymentRouter contract

use common::AccessError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller lacks the required role")]
    Unauthorized,

    #[error("Cannot revoke the last admin")]
    CannotRevokeLastAdmin,

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Arity mismatch: {left} ids but {right} entries")]
    ArityMismatch { left: usize, right: usize },

    #[error("Deployment unavailable on chain {chain_id}")]
    ChainUnavailable { chain_id: u64 },

    #[error("Invalid deploy params: {reason}")]
    InvalidParams { reason: String },

    #[error("Insufficient payment: expected {expected}, got {got}")]
    InsufficientPayment { expected: Uint128, got: Uint128 },
}

impl From<AccessError> for ContractError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Std(e) => ContractError::Std(e),
            AccessError::MissingRole { .. } => ContractError::Unauthorized,
            AccessError::LastAdmin => ContractError::CannotRevokeLastAdmin,
        }
    }
}
