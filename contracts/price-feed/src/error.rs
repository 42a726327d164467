//! Error types for the PriceFeed contract

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

    #[error("Arity mismatch: {left} ids but {right} entries")]
    ArityMismatch { left: usize, right: usize },

    #[error("Unknown chain: {chain_id}")]
    UnknownChain { chain_id: u64 },

    #[error("Fee overflow: price {price} x gas limit {gas_limit}")]
    FeeOverflow { price: String, gas_limit: u64 },
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

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::Std(e) => e,
            other => StdError::generic_err(other.to_string()),
        }
    }
}
