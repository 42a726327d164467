//! Error types for the Router contract

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

    #[error("Execution already in progress for chain {src_chain_id} nonce {nonce}")]
    ExecutionInProgress { src_chain_id: u64, nonce: u64 },

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
