//! Error types for the MasterRouter contract

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

    #[error("Router is paused")]
    Paused,

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Arity mismatch: {left} ids but {right} entries")]
    ArityMismatch { left: usize, right: usize },

    #[error("Unknown chain: {chain_id}")]
    UnknownChain { chain_id: u64 },

    #[error("Inactive chain: {chain_id}")]
    InactiveChain { chain_id: u64 },

    #[error("Unknown origin on chain {src_chain_id}: {sender}")]
    UnknownOrigin { src_chain_id: u64, sender: String },

    #[error("Origin {sender} on chain {src_chain_id} may not perform {kind}")]
    OriginNotPermitted {
        src_chain_id: u64,
        sender: String,
        kind: String,
    },

    #[error("Insufficient payment: expected {expected}, got {got}")]
    InsufficientPayment { expected: Uint128, got: Uint128 },

    #[error("Message already processed: chain {src_chain_id} nonce {nonce}")]
    ReplayedMessage { src_chain_id: u64, nonce: u64 },

    #[error("Token not registered: {token}")]
    TokenNotRegistered { token: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
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
