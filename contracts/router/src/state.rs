//! State definitions for the Router contract

use common::{ExecutionStatus, OperationKind, MAX_GAS_LIMIT};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::Item;

use crate::error::ContractError;

#[cw_serde]
pub struct Config {
    /// Only caller allowed to submit operations
    pub master_router: Addr,
    /// Token factory used for deploy operations
    pub factory: Option<Addr>,
}

/// Gas ceiling forwarded per operation kind
#[cw_serde]
#[derive(Copy)]
pub struct GasLimits {
    /// Mint, burn and credit transfer
    pub store_gas_limit: u64,
    pub update_gas_limit: u64,
    pub payment_transfer_gas_limit: u64,
    pub deploy_gas_limit: u64,
}

impl GasLimits {
    pub fn validate(&self) -> Result<(), ContractError> {
        let limits = [
            ("store_gas_limit", self.store_gas_limit),
            ("update_gas_limit", self.update_gas_limit),
            ("payment_transfer_gas_limit", self.payment_transfer_gas_limit),
            ("deploy_gas_limit", self.deploy_gas_limit),
        ];
        for (name, value) in limits {
            if value == 0 || value > MAX_GAS_LIMIT {
                return Err(ContractError::InvalidConfig {
                    reason: format!("{name} must be in 1..={MAX_GAS_LIMIT}, got {value}"),
                });
            }
        }
        Ok(())
    }

    pub fn for_kind(&self, kind: OperationKind) -> u64 {
        match kind {
            OperationKind::Mint | OperationKind::Burn | OperationKind::CreditTransfer => {
                self.store_gas_limit
            }
            OperationKind::Update => self.update_gas_limit,
            OperationKind::PaymentTransfer => self.payment_transfer_gas_limit,
            OperationKind::Deploy => self.deploy_gas_limit,
        }
    }
}

/// Operation currently waiting for its downstream reply
#[cw_serde]
pub struct ActiveExecution {
    pub src_chain_id: u64,
    pub nonce: u64,
    pub sender: Binary,
    pub kind: OperationKind,
    pub status: ExecutionStatus,
}

#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub completed: u64,
    pub failed: u64,
}

pub const CONTRACT_NAME: &str = "crates.io:omnichain-router";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for the bounded downstream call
pub const REPLY_EXECUTE: u64 = 1;

pub const CONFIG: Item<Config> = Item::new("config");
pub const GAS_LIMITS: Item<GasLimits> = Item::new("gas_limits");
pub const STATS: Item<Stats> = Item::new("stats");

/// Set while a downstream submessage is in flight, cleared in `reply`
pub const ACTIVE_EXECUTION: Item<ActiveExecution> = Item::new("active_execution");
