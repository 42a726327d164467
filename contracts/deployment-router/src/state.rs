//! State definitions for the DeploymentRouter contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub master_router: Addr,
    pub price_feed: Addr,
    /// Denom deployments are paid in; must match the MasterRouter fee denom
    pub payment_denom: String,
    /// Protocol id deploy operations are routed under
    pub protocol_id: u32,
}

/// Per-destination deployment settings
#[cw_serde]
#[derive(Copy)]
pub struct DstDeployConfig {
    /// Gas the destination Router is paid for
    pub deploy_gas_limit: u64,
    pub enabled: bool,
}

pub const CONTRACT_NAME: &str = "crates.io:omnichain-deployment-router";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Key: destination chain id
pub const DST_DEPLOY_CONFIGS: Map<u64, DstDeployConfig> = Map::new("dst_deploy_configs");

/// Number of chains with `enabled == true`
pub const AVAILABLE_CHAINS: Item<u32> = Item::new("available_chains");
