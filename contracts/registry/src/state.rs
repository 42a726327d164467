//! State definitions for the Registry contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Chain id of the chain this registry is deployed on
    pub local_chain_id: u64,
}

/// Participating remote chain
#[cw_serde]
pub struct ChainConfig {
    pub chain_id: u64,
    /// Canonical 32-byte address of the MasterRouter on that chain
    pub remote_router: [u8; 32],
    /// Precision of the chain's native token
    pub native_decimals: u8,
    /// Inactive chains are refused for outbound and inbound routing
    pub is_active: bool,
}

/// Registered token program
#[cw_serde]
pub struct TokenRecord {
    pub chain_id: u64,
    /// Local address, or opaque remote identifier for other chains
    pub token: String,
    pub registered_by: Addr,
    pub registered_at: Timestamp,
}

/// Sender on a remote chain allowed to deliver operations here
#[cw_serde]
pub struct RemoteOrigin {
    pub chain_id: u64,
    pub origin: [u8; 32],
    /// Local counterpart token this origin may mint, burn and credit
    pub local_token: Option<String>,
    /// Privileged origins may perform every operation kind
    pub privileged: bool,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:omnichain-registry";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Key: chain id
pub const CHAINS: Map<u64, ChainConfig> = Map::new("chains");

/// Key: (chain id, token identifier)
pub const TOKENS: Map<(u64, &str), TokenRecord> = Map::new("tokens");

/// Key: (remote chain id, 32-byte origin)
pub const REMOTE_ORIGINS: Map<(u64, &[u8]), RemoteOrigin> = Map::new("remote_origins");
