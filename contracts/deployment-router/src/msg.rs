//! Message types for the DeploymentRouter contract

use common::{DeployParams, Role};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

pub use crate::state::DstDeployConfig;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    pub master_router: String,
    pub price_feed: String,
    pub payment_denom: String,
    pub protocol_id: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Configure deployment per destination chain
    ///
    /// Authorization: Admin only
    SetDstDeployConfig {
        chain_ids: Vec<u64>,
        configs: Vec<DstDeployConfig>,
    },

    /// Deploy `params` on every chain in `dst_chain_ids`. Attached funds in
    /// `payment_denom` must cover the summed per-chain fees.
    Deploy {
        dst_chain_ids: Vec<u64>,
        params: DeployParams,
    },

    GrantRole { role: Role, account: String },
    RevokeRole { role: Role, account: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(Option<DstDeployConfig>)]
    DstDeployConfig { chain_id: u64 },

    #[returns(AvailableChainsResponse)]
    AvailableChains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(DeployFeeResponse)]
    EstimateDeployFee { dst_chain_ids: Vec<u64> },

    #[returns(HasRoleResponse)]
    HasRole { role: Role, account: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub master_router: Addr,
    pub price_feed: Addr,
    pub payment_denom: String,
    pub protocol_id: u32,
}

#[cw_serde]
pub struct AvailableChainsResponse {
    /// Total number of enabled chains
    pub count: u32,
    /// Enabled chain ids in this page
    pub chain_ids: Vec<u64>,
}

#[cw_serde]
pub struct ChainFee {
    pub chain_id: u64,
    pub fee: Uint128,
}

#[cw_serde]
pub struct DeployFeeResponse {
    pub fees: Vec<ChainFee>,
    pub total: Uint128,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}
