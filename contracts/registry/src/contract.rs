//! Omnichain Registry - Entry Points

use common::access;
use common::Role;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_deregister_token, execute_grant_role, execute_register_token,
    execute_remove_remote_origin, execute_revoke_role, execute_set_chain_active,
    execute_set_chain_info, execute_set_remote_origin,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_chain, query_chains, query_config, query_has_role, query_is_chain_active,
    query_is_token_registered, query_remote_origin, query_role_members, query_token,
    query_tokens,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    if msg.local_chain_id == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "local chain id 0 is reserved".to_string(),
        });
    }

    CONFIG.save(
        deps.storage,
        &Config {
            local_chain_id: msg.local_chain_id,
        },
    )?;
    access::grant_role(deps.storage, Role::Admin, &admin)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("local_chain_id", msg.local_chain_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Chains
        ExecuteMsg::SetChainInfo { chain_ids, configs } => {
            execute_set_chain_info(deps, info, chain_ids, configs)
        }
        ExecuteMsg::SetChainActive {
            chain_id,
            is_active,
        } => execute_set_chain_active(deps, info, chain_id, is_active),

        // Tokens
        ExecuteMsg::RegisterToken { chain_id, token } => {
            execute_register_token(deps, env, info, chain_id, token)
        }
        ExecuteMsg::DeregisterToken { chain_id, token } => {
            execute_deregister_token(deps, info, chain_id, token)
        }

        // Remote origins
        ExecuteMsg::SetRemoteOrigin {
            chain_id,
            origin,
            local_token,
            privileged,
        } => execute_set_remote_origin(deps, info, chain_id, origin, local_token, privileged),
        ExecuteMsg::RemoveRemoteOrigin { chain_id, origin } => {
            execute_remove_remote_origin(deps, info, chain_id, origin)
        }

        // Roles
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Chain { chain_id } => to_json_binary(&query_chain(deps, chain_id)?),
        QueryMsg::Chains { start_after, limit } => {
            to_json_binary(&query_chains(deps, start_after, limit)?)
        }
        QueryMsg::IsChainActive { chain_id } => {
            to_json_binary(&query_is_chain_active(deps, chain_id)?)
        }
        QueryMsg::Token { chain_id, token } => to_json_binary(&query_token(deps, chain_id, token)?),
        QueryMsg::Tokens {
            chain_id,
            start_after,
            limit,
        } => to_json_binary(&query_tokens(deps, chain_id, start_after, limit)?),
        QueryMsg::IsTokenRegistered { chain_id, token } => {
            to_json_binary(&query_is_token_registered(deps, chain_id, token)?)
        }
        QueryMsg::RemoteOrigin { chain_id, origin } => {
            to_json_binary(&query_remote_origin(deps, chain_id, origin)?)
        }
        QueryMsg::HasRole { role, account } => to_json_binary(&query_has_role(deps, role, account)?),
        QueryMsg::RoleMembers { role } => to_json_binary(&query_role_members(deps, role)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
