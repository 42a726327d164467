//! Execute handlers for the MasterRouter contract.
//!
//! - `outbound` - `Send`
//! - `inbound` - `Receive` and the Router reply
//! - `admin` - configuration, fees, pause and roles

mod admin;
mod inbound;
mod outbound;

pub use admin::*;
pub use inbound::*;
pub use outbound::*;

use common::to_bytes32;
use cosmwasm_std::{Binary, Deps, StdResult};
use price_feed::msg::{FeeQuote, QueryMsg as PriceFeedQueryMsg};
use registry::msg::{ChainResponse, QueryMsg as RegistryQueryMsg, RemoteOriginResponse};

use crate::error::ContractError;
use crate::state::{Config, DST_MASTER_ROUTERS};

/// Registry record for a chain, failing unless it exists and is active.
pub(crate) fn load_active_chain(
    deps: Deps,
    config: &Config,
    chain_id: u64,
) -> Result<ChainResponse, ContractError> {
    let chain: Option<ChainResponse> = deps
        .querier
        .query_wasm_smart(&config.registry, &RegistryQueryMsg::Chain { chain_id })?;
    let chain = chain.ok_or(ContractError::UnknownChain { chain_id })?;
    if !chain.is_active {
        return Err(ContractError::InactiveChain { chain_id });
    }
    Ok(chain)
}

/// Peer MasterRouter for a chain: own override first, Registry second.
pub(crate) fn peer_for(
    deps: Deps,
    chain: &ChainResponse,
) -> Result<[u8; 32], ContractError> {
    if let Some(peer) = DST_MASTER_ROUTERS.may_load(deps.storage, chain.chain_id)? {
        return Ok(peer);
    }
    to_bytes32(&chain.remote_router).map_err(|e| ContractError::InvalidConfig {
        reason: e.to_string(),
    })
}

pub(crate) fn registry_has_role(
    deps: Deps,
    config: &Config,
    role: common::Role,
    account: &str,
) -> StdResult<bool> {
    let res: registry::msg::HasRoleResponse = deps.querier.query_wasm_smart(
        &config.registry,
        &RegistryQueryMsg::HasRole {
            role,
            account: account.to_string(),
        },
    )?;
    Ok(res.has_role)
}

pub(crate) fn registry_token_registered(
    deps: Deps,
    config: &Config,
    token: &str,
) -> StdResult<bool> {
    let res: registry::msg::IsTokenRegisteredResponse = deps.querier.query_wasm_smart(
        &config.registry,
        &RegistryQueryMsg::IsTokenRegistered {
            chain_id: config.chain_id,
            token: token.to_string(),
        },
    )?;
    Ok(res.registered)
}

pub(crate) fn registry_remote_origin(
    deps: Deps,
    config: &Config,
    chain_id: u64,
    origin: &[u8; 32],
) -> StdResult<Option<RemoteOriginResponse>> {
    deps.querier.query_wasm_smart(
        &config.registry,
        &RegistryQueryMsg::RemoteOrigin {
            chain_id,
            origin: Binary::from(origin.to_vec()),
        },
    )
}

/// Quote the fee for `gas_limit` units of destination gas.
pub(crate) fn quote_fee(
    deps: Deps,
    config: &Config,
    dst_chain_id: u64,
    gas_limit: u64,
) -> Result<FeeQuote, ContractError> {
    Ok(deps.querier.query_wasm_smart(
        &config.price_feed,
        &PriceFeedQueryMsg::EstimateFee {
            dst_chain_id,
            gas_limit,
        },
    )?)
}
