//! Error types for the Registry contract

use common::AccessError;
use cosmwasm_std::StdError;
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

    #[error("Arity mismatch: {left} chain ids but {right} entries")]
    ArityMismatch { left: usize, right: usize },

    #[error("Unknown chain: {chain_id}")]
    UnknownChain { chain_id: u64 },

    #[error("Token not registered: {token} on chain {chain_id}")]
    TokenNotRegistered { chain_id: u64, token: String },

    #[error("Origin not found: {origin} on chain {chain_id}")]
    OriginNotFound { chain_id: u64, origin: String },
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
