//! Execute handlers for the Registry contract.
//!
//! Every handler checks the caller's role first and validates the full input
//! before the first write, so a failed call never leaves partial state.

use std::collections::BTreeSet;

use common::access::{self, grant_role_checked, revoke_role_checked};
use common::address::is_zero;
use common::{bytes32_to_hex, to_bytes32, Role, MAX_NATIVE_DECIMALS};
use cosmwasm_std::{Binary, DepsMut, Env, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::msg::ChainInfoMsg;
use crate::state::{
    ChainConfig, RemoteOrigin, TokenRecord, CHAINS, CONFIG, REMOTE_ORIGINS, TOKENS,
};

// ============================================================================
// Chain Management
// ============================================================================

/// Create or overwrite chain records (admin only).
pub fn execute_set_chain_info(
    deps: DepsMut,
    info: MessageInfo,
    chain_ids: Vec<u64>,
    configs: Vec<ChainInfoMsg>,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    if chain_ids.len() != configs.len() {
        return Err(ContractError::ArityMismatch {
            left: chain_ids.len(),
            right: configs.len(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut records = Vec::with_capacity(chain_ids.len());
    for (chain_id, cfg) in chain_ids.into_iter().zip(configs) {
        if chain_id == 0 {
            return Err(ContractError::InvalidConfig {
                reason: "chain id 0 is reserved".to_string(),
            });
        }
        if !seen.insert(chain_id) {
            return Err(ContractError::InvalidConfig {
                reason: format!("duplicate chain id {chain_id}"),
            });
        }
        if cfg.native_decimals > MAX_NATIVE_DECIMALS {
            return Err(ContractError::InvalidConfig {
                reason: format!(
                    "native decimals {} exceed {}",
                    cfg.native_decimals, MAX_NATIVE_DECIMALS
                ),
            });
        }
        let remote_router =
            to_bytes32(&cfg.remote_router).map_err(|e| ContractError::InvalidConfig {
                reason: e.to_string(),
            })?;
        if cfg.is_active && is_zero(&remote_router) {
            return Err(ContractError::InvalidConfig {
                reason: format!("active chain {chain_id} has no remote router"),
            });
        }

        records.push(ChainConfig {
            chain_id,
            remote_router,
            native_decimals: cfg.native_decimals,
            is_active: cfg.is_active,
        });
    }

    let mut response = Response::new().add_attribute("action", "set_chain_info");
    for record in &records {
        CHAINS.save(deps.storage, record.chain_id, record)?;
        response = response.add_event(
            Event::new("chain_updated")
                .add_attribute("chain_id", record.chain_id.to_string())
                .add_attribute("remote_router", bytes32_to_hex(&record.remote_router))
                .add_attribute("native_decimals", record.native_decimals.to_string())
                .add_attribute("is_active", record.is_active.to_string()),
        );
    }

    Ok(response.add_attribute("count", records.len().to_string()))
}

/// Toggle a chain's active flag (admin only).
pub fn execute_set_chain_active(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    is_active: bool,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    let mut chain = CHAINS
        .may_load(deps.storage, chain_id)?
        .ok_or(ContractError::UnknownChain { chain_id })?;
    if is_active && is_zero(&chain.remote_router) {
        return Err(ContractError::InvalidConfig {
            reason: format!("active chain {chain_id} has no remote router"),
        });
    }
    chain.is_active = is_active;
    CHAINS.save(deps.storage, chain_id, &chain)?;

    Ok(Response::new()
        .add_attribute("action", "set_chain_active")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("is_active", is_active.to_string()))
}

// ============================================================================
// Token Management
// ============================================================================

/// Register a token program on a chain (admin or factory).
pub fn execute_register_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    chain_id: u64,
    token: String,
) -> Result<Response, ContractError> {
    access::ensure_any_role(deps.storage, &[Role::Admin, Role::Factory], &info.sender)?;

    if chain_id == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "chain id 0 is reserved".to_string(),
        });
    }
    if token.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "token identifier is empty".to_string(),
        });
    }

    // Local tokens must be real addresses; remote ones are opaque identifiers
    let config = CONFIG.load(deps.storage)?;
    if chain_id == config.local_chain_id {
        deps.api
            .addr_validate(&token)
            .map_err(|e| ContractError::InvalidConfig {
                reason: format!("invalid local token {token}: {e}"),
            })?;
    }

    if TOKENS.has(deps.storage, (chain_id, &token)) {
        return Err(ContractError::InvalidConfig {
            reason: format!("token {token} already registered on chain {chain_id}"),
        });
    }

    let record = TokenRecord {
        chain_id,
        token: token.clone(),
        registered_by: info.sender.clone(),
        registered_at: env.block.time,
    };
    TOKENS.save(deps.storage, (chain_id, &token), &record)?;

    Ok(Response::new()
        .add_attribute("action", "register_token")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("token", token)
        .add_attribute("registered_by", info.sender))
}

/// Remove a token registration (admin or approver).
pub fn execute_deregister_token(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    token: String,
) -> Result<Response, ContractError> {
    access::ensure_any_role(deps.storage, &[Role::Admin, Role::Approver], &info.sender)?;

    if !TOKENS.has(deps.storage, (chain_id, &token)) {
        return Err(ContractError::TokenNotRegistered { chain_id, token });
    }
    TOKENS.remove(deps.storage, (chain_id, &token));

    Ok(Response::new()
        .add_attribute("action", "deregister_token")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("token", token))
}

// ============================================================================
// Remote Origins
// ============================================================================

/// Authorize a remote sender for inbound delivery (admin only).
pub fn execute_set_remote_origin(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    origin: Binary,
    local_token: Option<String>,
    privileged: bool,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    if chain_id == 0 || chain_id == config.local_chain_id {
        return Err(ContractError::InvalidConfig {
            reason: format!("chain {chain_id} cannot hold remote origins"),
        });
    }
    let origin = to_bytes32(&origin).map_err(|e| ContractError::InvalidConfig {
        reason: e.to_string(),
    })?;
    if is_zero(&origin) {
        return Err(ContractError::InvalidConfig {
            reason: "origin is the zero address".to_string(),
        });
    }
    if local_token.is_none() && !privileged {
        return Err(ContractError::InvalidConfig {
            reason: "origin needs a local token or the privileged flag".to_string(),
        });
    }
    if let Some(token) = &local_token {
        if !TOKENS.has(deps.storage, (config.local_chain_id, token)) {
            return Err(ContractError::TokenNotRegistered {
                chain_id: config.local_chain_id,
                token: token.clone(),
            });
        }
    }

    let record = RemoteOrigin {
        chain_id,
        origin,
        local_token,
        privileged,
    };
    REMOTE_ORIGINS.save(deps.storage, (chain_id, origin.as_slice()), &record)?;

    Ok(Response::new()
        .add_attribute("action", "set_remote_origin")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("origin", bytes32_to_hex(&origin))
        .add_attribute(
            "local_token",
            record.local_token.unwrap_or_else(|| "none".to_string()),
        )
        .add_attribute("privileged", privileged.to_string()))
}

/// Revoke a remote sender (admin or approver).
pub fn execute_remove_remote_origin(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    origin: Binary,
) -> Result<Response, ContractError> {
    access::ensure_any_role(deps.storage, &[Role::Admin, Role::Approver], &info.sender)?;

    let not_found = || ContractError::OriginNotFound {
        chain_id,
        origin: origin.to_base64(),
    };
    let key = to_bytes32(&origin).map_err(|_| not_found())?;
    if !REMOTE_ORIGINS.has(deps.storage, (chain_id, key.as_slice())) {
        return Err(not_found());
    }
    REMOTE_ORIGINS.remove(deps.storage, (chain_id, key.as_slice()));

    Ok(Response::new()
        .add_attribute("action", "remove_remote_origin")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("origin", bytes32_to_hex(&key)))
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
        .add_attribute("action", "grant_role")
        .add_attribute("role", role.as_str())
        .add_attribute("account", account))
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
        .add_attribute("action", "revoke_role")
        .add_attribute("role", role.as_str())
        .add_attribute("account", account))
}
