//! Message types for the Router contract

use common::{Operation, Role};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

pub use crate::state::{GasLimits, Stats};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    pub master_router: String,
    pub factory: Option<String>,
    pub gas_limits: GasLimits,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Apply one inbound operation. Response data carries the JSON
    /// `ExecutionResult`.
    ///
    /// Authorization: MasterRouter only
    Execute {
        src_chain_id: u64,
        nonce: u64,
        /// 32-byte canonical address of the remote originator
        sender: Binary,
        /// Destination gas the sender paid for; the downstream call runs
        /// with the smaller of this and the per-kind ceiling
        gas_limit: u64,
        operation: Operation,
    },

    /// Authorization: Admin only
    SetGasLimits { gas_limits: GasLimits },

    /// Authorization: Admin only
    SetFactory { factory: Option<String> },

    /// Authorization: Admin only
    SetMasterRouter { master_router: String },

    GrantRole { role: Role, account: String },
    RevokeRole { role: Role, account: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(GasLimits)]
    GasLimits {},

    #[returns(Stats)]
    Stats {},

    #[returns(HasRoleResponse)]
    HasRole { role: Role, account: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub master_router: Addr,
    pub factory: Option<Addr>,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}
