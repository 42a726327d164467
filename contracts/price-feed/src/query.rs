//! Query handlers for the PriceFeed contract.

use common::{access, Role};
use cosmwasm_std::{Deps, StdResult, Uint128, Uint256};

use crate::error::ContractError;
use crate::msg::{ConfigResponse, FeeQuote, GasPriceResponse, HasRoleResponse, PriceGroupResponse};
use crate::pricing::{dst_gas_price_at_src_native, fee_for_gas, unpack_prices, unpack_slot};
use crate::state::{ChainPriceInfo, CHAIN_INFO, CONFIG, PRICE_GROUPS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        native_decimals: config.native_decimals,
    })
}

pub fn query_chain_info(deps: Deps, chain_id: u64) -> StdResult<Option<ChainPriceInfo>> {
    CHAIN_INFO.may_load(deps.storage, chain_id)
}

pub fn query_price_group(deps: Deps, group_id: u64) -> StdResult<PriceGroupResponse> {
    let group = PRICE_GROUPS.may_load(deps.storage, group_id)?;
    let word = group.as_ref().map(|g| g.word).unwrap_or_default();

    Ok(PriceGroupResponse {
        group_id,
        word,
        prices: unpack_prices(word).to_vec(),
        updated_at: group.map(|g| g.updated_at),
    })
}

/// Unset groups read as zero.
fn load_src_price(deps: Deps, dst_chain_id: u64) -> Result<Uint256, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let info = CHAIN_INFO
        .may_load(deps.storage, dst_chain_id)?
        .ok_or(ContractError::UnknownChain {
            chain_id: dst_chain_id,
        })?;

    let word = PRICE_GROUPS
        .may_load(deps.storage, info.group_id)?
        .map(|g| g.word)
        .unwrap_or_default();
    let encoded = unpack_slot(word, info.slot)?;

    dst_gas_price_at_src_native(encoded, info.native_decimals, config.native_decimals)
}

fn price_to_u128(price: Uint256) -> Result<Uint128, ContractError> {
    fee_for_gas(price, 1)
}

pub fn query_dst_gas_price(deps: Deps, dst_chain_id: u64) -> StdResult<GasPriceResponse> {
    let price = load_src_price(deps, dst_chain_id)?;
    Ok(GasPriceResponse {
        dst_chain_id,
        price: price_to_u128(price)?,
    })
}

pub fn query_estimate_fee(deps: Deps, dst_chain_id: u64, gas_limit: u64) -> StdResult<FeeQuote> {
    let price = load_src_price(deps, dst_chain_id)?;
    let amount = fee_for_gas(price, gas_limit)?;

    Ok(FeeQuote {
        amount_in_src_native: amount,
        dst_gas_price_in_src_native: price_to_u128(price)?,
    })
}

pub fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let has_role = match deps.api.addr_validate(&account) {
        Ok(addr) => access::has_role(deps.storage, role, &addr)?,
        Err(_) => false,
    };
    Ok(HasRoleResponse { has_role })
}
