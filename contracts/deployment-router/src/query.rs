//! Query handlers for the DeploymentRouter contract.

use common::{access, Role};
use cosmwasm_std::{Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::execute::{quote_deployments, total_fee};
use crate::msg::{
    AvailableChainsResponse, ChainFee, ConfigResponse, DeployFeeResponse, HasRoleResponse,
};
use crate::state::{DstDeployConfig, AVAILABLE_CHAINS, CONFIG, DST_DEPLOY_CONFIGS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        master_router: config.master_router,
        price_feed: config.price_feed,
        payment_denom: config.payment_denom,
        protocol_id: config.protocol_id,
    })
}

pub fn query_dst_deploy_config(deps: Deps, chain_id: u64) -> StdResult<Option<DstDeployConfig>> {
    DST_DEPLOY_CONFIGS.may_load(deps.storage, chain_id)
}

pub fn query_available_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<AvailableChainsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let chain_ids = DST_DEPLOY_CONFIGS
        .range(deps.storage, start, None, Order::Ascending)
        .filter(|item| item.as_ref().map_or(true, |(_, c)| c.enabled))
        .take(limit)
        .map(|item| item.map(|(chain_id, _)| chain_id))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AvailableChainsResponse {
        count: AVAILABLE_CHAINS.load(deps.storage)?,
        chain_ids,
    })
}

pub fn query_estimate_deploy_fee(
    deps: Deps,
    dst_chain_ids: Vec<u64>,
) -> StdResult<DeployFeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    let quotes = quote_deployments(deps, &config, &dst_chain_ids)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let total = total_fee(&quotes)?;

    Ok(DeployFeeResponse {
        fees: quotes
            .into_iter()
            .map(|q| ChainFee {
                chain_id: q.chain_id,
                fee: q.fee,
            })
            .collect(),
        total,
    })
}

pub fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let has_role = match deps.api.addr_validate(&account) {
        Ok(addr) => access::has_role(deps.storage, role, &addr)?,
        Err(_) => false,
    };
    Ok(HasRoleResponse { has_role })
}
