//! Execute handlers for the PriceFeed contract.

use std::collections::BTreeSet;

use common::access::{self, grant_role_checked, revoke_role_checked};
use common::{Role, MAX_NATIVE_DECIMALS};
use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Uint256};

use crate::error::ContractError;
use crate::pricing::{unpack_prices, PRICES_PER_WORD};
use crate::state::{ChainPriceInfo, PriceGroup, CHAIN_INFO, PRICE_GROUPS};

/// Assign chains to price lanes (admin only).
pub fn execute_set_chain_info(
    deps: DepsMut,
    info: MessageInfo,
    chain_ids: Vec<u64>,
    infos: Vec<ChainPriceInfo>,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    if chain_ids.len() != infos.len() {
        return Err(ContractError::ArityMismatch {
            left: chain_ids.len(),
            right: infos.len(),
        });
    }

    let mut seen_chains = BTreeSet::new();
    let mut seen_lanes = BTreeSet::new();
    for (chain_id, price_info) in chain_ids.iter().zip(&infos) {
        if *chain_id == 0 {
            return Err(ContractError::InvalidConfig {
                reason: "chain id 0 is reserved".to_string(),
            });
        }
        if !seen_chains.insert(*chain_id) {
            return Err(ContractError::InvalidConfig {
                reason: format!("duplicate chain id {chain_id}"),
            });
        }
        if price_info.slot as usize >= PRICES_PER_WORD {
            return Err(ContractError::InvalidConfig {
                reason: format!(
                    "slot {} out of range, word holds {}",
                    price_info.slot, PRICES_PER_WORD
                ),
            });
        }
        if price_info.native_decimals > MAX_NATIVE_DECIMALS {
            return Err(ContractError::InvalidConfig {
                reason: format!(
                    "native decimals {} exceed {}",
                    price_info.native_decimals, MAX_NATIVE_DECIMALS
                ),
            });
        }
        if !seen_lanes.insert((price_info.group_id, price_info.slot)) {
            return Err(ContractError::InvalidConfig {
                reason: format!(
                    "group {} slot {} assigned twice",
                    price_info.group_id, price_info.slot
                ),
            });
        }
    }

    for (chain_id, price_info) in chain_ids.iter().zip(&infos) {
        CHAIN_INFO.save(deps.storage, *chain_id, price_info)?;
    }

    Ok(Response::new()
        .add_attribute("action", "set_chain_info")
        .add_attribute("count", chain_ids.len().to_string()))
}

/// Replace whole price words (provider only).
pub fn execute_set_prices(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    group_ids: Vec<u64>,
    price_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Provider, &info.sender)?;

    if group_ids.len() != price_words.len() {
        return Err(ContractError::ArityMismatch {
            left: group_ids.len(),
            right: price_words.len(),
        });
    }
    let mut seen = BTreeSet::new();
    if let Some(dup) = group_ids.iter().find(|id| !seen.insert(**id)) {
        return Err(ContractError::InvalidConfig {
            reason: format!("duplicate group id {dup}"),
        });
    }

    let mut response = Response::new().add_attribute("action", "set_prices");
    for (group_id, word) in group_ids.iter().zip(price_words) {
        PRICE_GROUPS.save(
            deps.storage,
            *group_id,
            &PriceGroup {
                word,
                updated_at: env.block.time,
                updated_by: info.sender.clone(),
            },
        )?;

        let prices = unpack_prices(word)
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",");
        response = response.add_event(
            Event::new("price_updated")
                .add_attribute("group_id", group_id.to_string())
                .add_attribute("prices", prices)
                .add_attribute("provider", info.sender.as_str()),
        );
    }

    Ok(response.add_attribute("count", group_ids.len().to_string()))
}

pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    let event = grant_role_checked(deps.storage, deps.api, &info.sender, role, &account)?;
    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "grant_role"))
}

pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    let event = revoke_role_checked(deps.storage, deps.api, &info.sender, role, &account)?;
    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "revoke_role"))
}
