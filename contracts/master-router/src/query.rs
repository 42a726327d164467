//! Query handlers for the MasterRouter contract.

use common::{access, Role};
use cosmwasm_std::{Addr, Binary, Coin, Deps, StdError, StdResult};
use registry::msg::{ChainResponse, QueryMsg as RegistryQueryMsg};

use crate::execute::quote_fee;
use crate::msg::{
    ConfigResponse, DstMasterRouterResponse, FeeQuote, HasRoleResponse, IsProcessedResponse,
    OutboundNonceResponse, ProtocolFeesResponse,
};
use crate::state::{
    CONFIG, DST_MASTER_ROUTERS, OUTBOUND_NONCE, PROTOCOL_FEES, RECEIVED, ROUTERS,
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        chain_id: config.chain_id,
        registry: config.registry,
        price_feed: config.price_feed,
        endpoint: config.endpoint,
        fee_collector: config.fee_collector,
        fee_denom: config.fee_denom,
        protocol_fee_bps: config.protocol_fee_bps,
        paused: config.paused,
    })
}

pub fn query_dst_master_router(deps: Deps, chain_id: u64) -> StdResult<DstMasterRouterResponse> {
    if let Some(peer) = DST_MASTER_ROUTERS.may_load(deps.storage, chain_id)? {
        return Ok(DstMasterRouterResponse {
            chain_id,
            address: Some(Binary::from(peer.to_vec())),
            is_override: true,
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let chain: Option<ChainResponse> = deps
        .querier
        .query_wasm_smart(&config.registry, &RegistryQueryMsg::Chain { chain_id })?;
    Ok(DstMasterRouterResponse {
        chain_id,
        address: chain.map(|c| c.remote_router),
        is_override: false,
    })
}

pub fn query_router(deps: Deps, protocol_id: u32) -> StdResult<Option<Addr>> {
    ROUTERS.may_load(deps.storage, protocol_id)
}

pub fn query_estimate_fee(deps: Deps, dst_chain_id: u64, gas_limit: u64) -> StdResult<FeeQuote> {
    let config = CONFIG.load(deps.storage)?;
    quote_fee(deps, &config, dst_chain_id, gas_limit)
        .map_err(|e| StdError::generic_err(e.to_string()))
}

pub fn query_is_processed(deps: Deps, src_chain_id: u64, nonce: u64) -> StdResult<IsProcessedResponse> {
    Ok(IsProcessedResponse {
        processed: RECEIVED.has(deps.storage, (src_chain_id, nonce)),
    })
}

pub fn query_outbound_nonce(deps: Deps) -> StdResult<OutboundNonceResponse> {
    Ok(OutboundNonceResponse {
        next_nonce: OUTBOUND_NONCE.load(deps.storage)?,
    })
}

pub fn query_protocol_fees(deps: Deps) -> StdResult<ProtocolFeesResponse> {
    let config = CONFIG.load(deps.storage)?;
    let accrued = PROTOCOL_FEES.load(deps.storage)?;
    Ok(ProtocolFeesResponse {
        accrued: Coin::new(accrued.u128(), config.fee_denom),
    })
}

pub fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let has_role = match deps.api.addr_validate(&account) {
        Ok(addr) => access::has_role(deps.storage, role, &addr)?,
        Err(_) => false,
    };
    Ok(HasRoleResponse { has_role })
}
