//! Query handlers for the Registry contract.

use common::{access, to_bytes32, Role};
use cosmwasm_std::{Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    ChainResponse, ChainsResponse, ConfigResponse, HasRoleResponse, IsChainActiveResponse,
    IsTokenRegisteredResponse, RemoteOriginResponse, RoleMembersResponse, TokenResponse, TokensResponse,
};
use crate::state::{ChainConfig, TokenRecord, CHAINS, CONFIG, REMOTE_ORIGINS, TOKENS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let chain_count = CHAINS
        .keys(deps.storage, None, None, Order::Ascending)
        .count() as u32;

    Ok(ConfigResponse {
        local_chain_id: config.local_chain_id,
        chain_count,
    })
}

// ============================================================================
// Chain Queries
// ============================================================================

fn chain_response(chain: ChainConfig) -> ChainResponse {
    ChainResponse {
        chain_id: chain.chain_id,
        remote_router: Binary::from(chain.remote_router.to_vec()),
        native_decimals: chain.native_decimals,
        is_active: chain.is_active,
    }
}

pub fn query_chain(deps: Deps, chain_id: u64) -> StdResult<Option<ChainResponse>> {
    Ok(CHAINS.may_load(deps.storage, chain_id)?.map(chain_response))
}

pub fn query_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ChainsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let chains = CHAINS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, chain)| chain_response(chain)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(ChainsResponse { chains })
}

/// Unknown chains report inactive.
pub fn query_is_chain_active(deps: Deps, chain_id: u64) -> StdResult<IsChainActiveResponse> {
    let is_active = CHAINS
        .may_load(deps.storage, chain_id)?
        .map(|c| c.is_active)
        .unwrap_or(false);
    Ok(IsChainActiveResponse {
        chain_id,
        is_active,
    })
}

// ============================================================================
// Token Queries
// ============================================================================

fn token_response(record: TokenRecord) -> TokenResponse {
    TokenResponse {
        chain_id: record.chain_id,
        token: record.token,
        registered_by: record.registered_by,
        registered_at: record.registered_at,
    }
}

pub fn query_token(deps: Deps, chain_id: u64, token: String) -> StdResult<Option<TokenResponse>> {
    Ok(TOKENS
        .may_load(deps.storage, (chain_id, &token))?
        .map(token_response))
}

pub fn query_tokens(
    deps: Deps,
    chain_id: u64,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = TOKENS
        .prefix(chain_id)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| token_response(record)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}

pub fn query_is_token_registered(
    deps: Deps,
    chain_id: u64,
    token: String,
) -> StdResult<IsTokenRegisteredResponse> {
    Ok(IsTokenRegisteredResponse {
        registered: TOKENS.has(deps.storage, (chain_id, &token)),
    })
}

/// Malformed origins are never authorized.
pub fn query_remote_origin(
    deps: Deps,
    chain_id: u64,
    origin: Binary,
) -> StdResult<Option<RemoteOriginResponse>> {
    let Ok(key) = to_bytes32(&origin) else {
        return Ok(None);
    };
    Ok(REMOTE_ORIGINS
        .may_load(deps.storage, (chain_id, key.as_slice()))?
        .map(|record| RemoteOriginResponse {
            chain_id: record.chain_id,
            origin: Binary::from(record.origin.to_vec()),
            local_token: record.local_token,
            privileged: record.privileged,
        }))
}

// ============================================================================
// Role Queries
// ============================================================================

/// Invalid addresses hold no roles.
pub fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let has_role = match deps.api.addr_validate(&account) {
        Ok(addr) => access::has_role(deps.storage, role, &addr)?,
        Err(_) => false,
    };
    Ok(HasRoleResponse { has_role })
}

pub fn query_role_members(deps: Deps, role: Role) -> StdResult<RoleMembersResponse> {
    Ok(RoleMembersResponse {
        role,
        members: access::members(deps.storage, role)?,
    })
}
