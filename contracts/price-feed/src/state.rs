//! State definitions for the PriceFeed contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint256};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Decimals of this chain's native token; fees are quoted at this precision
    pub native_decimals: u8,
}

/// Where a chain's price lives and how to read it
#[cw_serde]
pub struct ChainPriceInfo {
    pub group_id: u64,
    /// Index of the 64-bit lane inside the group word, 0..4
    pub slot: u8,
    /// Decimals the encoded price is denominated in
    pub native_decimals: u8,
}

/// One packed price word
#[cw_serde]
pub struct PriceGroup {
    pub word: Uint256,
    pub updated_at: Timestamp,
    pub updated_by: Addr,
}

pub const CONTRACT_NAME: &str = "crates.io:omnichain-price-feed";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// Key: chain id
pub const CHAIN_INFO: Map<u64, ChainPriceInfo> = Map::new("chain_info");

/// Key: group id
pub const PRICE_GROUPS: Map<u64, PriceGroup> = Map::new("price_groups");
