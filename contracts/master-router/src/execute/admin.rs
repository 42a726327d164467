//! Admin handlers: peers, routers, fees, pause switch and roles.

use std::collections::BTreeSet;

use common::access::{self, grant_role_checked, revoke_role_checked};
use common::{bytes32_to_hex, to_bytes32, Role};
use cosmwasm_std::{BankMsg, Binary, Coin, DepsMut, MessageInfo, Response, StdResult, Uint128};

use crate::error::ContractError;
use crate::state::{CONFIG, DST_MASTER_ROUTERS, PROTOCOL_FEES, ROUTERS};

/// Upper bound for `protocol_fee_bps` (100%)
pub const MAX_PROTOCOL_FEE_BPS: u16 = 10_000;

// ============================================================================
// Routing Configuration
// ============================================================================

pub fn execute_set_fee_collector(
    deps: DepsMut,
    info: MessageInfo,
    fee_collector: String,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    let fee_collector = deps.api.addr_validate(&fee_collector)?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.fee_collector = fee_collector.clone();
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_fee_collector")
        .add_attribute("fee_collector", fee_collector))
}

/// Override the peer MasterRouter for each chain. All entries are
/// validated before any is written.
pub fn execute_set_dst_master_router(
    deps: DepsMut,
    info: MessageInfo,
    chain_ids: Vec<u64>,
    addresses: Vec<Binary>,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    if chain_ids.len() != addresses.len() {
        return Err(ContractError::ArityMismatch {
            left: chain_ids.len(),
            right: addresses.len(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let mut seen = BTreeSet::new();
    let mut entries = Vec::with_capacity(chain_ids.len());
    for (chain_id, address) in chain_ids.into_iter().zip(addresses) {
        if chain_id == 0 || chain_id == config.chain_id {
            return Err(ContractError::InvalidConfig {
                reason: format!("chain id {chain_id} cannot have a remote peer"),
            });
        }
        if !seen.insert(chain_id) {
            return Err(ContractError::InvalidConfig {
                reason: format!("duplicate chain id {chain_id}"),
            });
        }
        let peer = to_bytes32(&address).map_err(|e| ContractError::InvalidConfig {
            reason: e.to_string(),
        })?;
        entries.push((chain_id, peer));
    }

    let mut response = Response::new().add_attribute("action", "set_dst_master_router");
    for (chain_id, peer) in &entries {
        DST_MASTER_ROUTERS.save(deps.storage, *chain_id, peer)?;
        response = response.add_attribute(format!("peer_{chain_id}"), bytes32_to_hex(peer));
    }
    Ok(response)
}

pub fn execute_set_routers(
    deps: DepsMut,
    info: MessageInfo,
    protocol_ids: Vec<u32>,
    routers: Vec<String>,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    if protocol_ids.len() != routers.len() {
        return Err(ContractError::ArityMismatch {
            left: protocol_ids.len(),
            right: routers.len(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut entries = Vec::with_capacity(routers.len());
    for (protocol_id, router) in protocol_ids.into_iter().zip(routers) {
        if !seen.insert(protocol_id) {
            return Err(ContractError::InvalidConfig {
                reason: format!("duplicate protocol id {protocol_id}"),
            });
        }
        entries.push((protocol_id, deps.api.addr_validate(&router)?));
    }

    let mut response = Response::new().add_attribute("action", "set_routers");
    for (protocol_id, router) in &entries {
        ROUTERS.save(deps.storage, *protocol_id, router)?;
        response = response.add_attribute(format!("router_{protocol_id}"), router.as_str());
    }
    Ok(response)
}

// ============================================================================
// Fees
// ============================================================================

pub fn execute_set_protocol_fee(
    deps: DepsMut,
    info: MessageInfo,
    protocol_fee_bps: u16,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    if protocol_fee_bps > MAX_PROTOCOL_FEE_BPS {
        return Err(ContractError::InvalidConfig {
            reason: format!("protocol fee {protocol_fee_bps} bps exceeds {MAX_PROTOCOL_FEE_BPS}"),
        });
    }
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.protocol_fee_bps = protocol_fee_bps;
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_protocol_fee")
        .add_attribute("protocol_fee_bps", protocol_fee_bps.to_string()))
}

pub fn execute_withdraw_protocol_fees(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let accrued = PROTOCOL_FEES.load(deps.storage)?;
    if accrued.is_zero() {
        return Err(ContractError::InvalidConfig {
            reason: "no protocol fees to withdraw".to_string(),
        });
    }
    PROTOCOL_FEES.save(deps.storage, &Uint128::zero())?;

    let config = CONFIG.load(deps.storage)?;
    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![Coin::new(accrued.u128(), config.fee_denom)],
        })
        .add_attribute("action", "withdraw_protocol_fees")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", accrued.to_string()))
}

// ============================================================================
// Pause
// ============================================================================

pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, true)
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, false)
}

fn set_paused(deps: DepsMut, info: MessageInfo, paused: bool) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", if paused { "pause" } else { "unpause" }))
}

// ============================================================================
// Roles
// ============================================================================

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
