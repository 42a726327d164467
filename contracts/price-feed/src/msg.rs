//! Message types for the PriceFeed contract

use common::Role;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128, Uint256};

pub use crate::state::ChainPriceInfo;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    /// Decimals of this chain's native token (at most 18)
    pub native_decimals: u8,
    /// Initial `Provider` role holders
    pub providers: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Assign chains to price lanes
    ///
    /// Authorization: Admin only
    SetChainInfo {
        chain_ids: Vec<u64>,
        infos: Vec<ChainPriceInfo>,
    },

    /// Replace whole price words
    ///
    /// Authorization: Provider only
    SetPrices {
        group_ids: Vec<u64>,
        price_words: Vec<Uint256>,
    },

    GrantRole { role: Role, account: String },
    RevokeRole { role: Role, account: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(Option<ChainPriceInfo>)]
    ChainInfo { chain_id: u64 },

    #[returns(PriceGroupResponse)]
    PriceGroup { group_id: u64 },

    /// Destination gas price in source-native base units
    #[returns(GasPriceResponse)]
    DstGasPriceAtSrcNative { dst_chain_id: u64 },

    #[returns(FeeQuote)]
    EstimateFee { dst_chain_id: u64, gas_limit: u64 },

    #[returns(HasRoleResponse)]
    HasRole { role: Role, account: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub native_decimals: u8,
}

#[cw_serde]
pub struct PriceGroupResponse {
    pub group_id: u64,
    pub word: Uint256,
    /// Decoded lanes, slot 0 first
    pub prices: Vec<u64>,
    /// `None` until the first write
    pub updated_at: Option<Timestamp>,
}

#[cw_serde]
pub struct GasPriceResponse {
    pub dst_chain_id: u64,
    pub price: Uint128,
}

/// Computed on every request, never stored
#[cw_serde]
pub struct FeeQuote {
    pub amount_in_src_native: Uint128,
    pub dst_gas_price_in_src_native: Uint128,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}
