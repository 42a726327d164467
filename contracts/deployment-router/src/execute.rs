//! Execute handlers for the DeploymentRouter contract.

use std::collections::BTreeSet;

use common::access::{self, grant_role_checked, revoke_role_checked};
use common::{DeployParams, Operation, Role, MAX_GAS_LIMIT, MAX_NATIVE_DECIMALS};
use cosmwasm_std::{
    to_json_binary, BankMsg, Coin, Deps, DepsMut, Event, MessageInfo, Response, StdError,
    StdResult, Uint128, WasmMsg,
};
use master_router::msg::ExecuteMsg as MasterRouterExecuteMsg;
use price_feed::msg::{FeeQuote, QueryMsg as PriceFeedQueryMsg};

use crate::error::ContractError;
use crate::state::{Config, DstDeployConfig, AVAILABLE_CHAINS, CONFIG, DST_DEPLOY_CONFIGS};

/// A priced destination
pub(crate) struct DeployQuote {
    pub chain_id: u64,
    pub deploy_gas_limit: u64,
    pub fee: Uint128,
}

/// Price every destination, failing on duplicates or unavailable chains.
pub(crate) fn quote_deployments(
    deps: Deps,
    config: &Config,
    dst_chain_ids: &[u64],
) -> Result<Vec<DeployQuote>, ContractError> {
    if dst_chain_ids.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "no destination chains".to_string(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut quotes = Vec::with_capacity(dst_chain_ids.len());
    for &chain_id in dst_chain_ids {
        if !seen.insert(chain_id) {
            return Err(ContractError::InvalidConfig {
                reason: format!("duplicate chain id {chain_id}"),
            });
        }
        let dst = DST_DEPLOY_CONFIGS
            .may_load(deps.storage, chain_id)?
            .filter(|c| c.enabled)
            .ok_or(ContractError::ChainUnavailable { chain_id })?;

        let quote: FeeQuote = deps.querier.query_wasm_smart(
            &config.price_feed,
            &PriceFeedQueryMsg::EstimateFee {
                dst_chain_id: chain_id,
                gas_limit: dst.deploy_gas_limit,
            },
        )?;
        quotes.push(DeployQuote {
            chain_id,
            deploy_gas_limit: dst.deploy_gas_limit,
            fee: quote.amount_in_src_native,
        });
    }
    Ok(quotes)
}

pub(crate) fn total_fee(quotes: &[DeployQuote]) -> StdResult<Uint128> {
    quotes.iter().try_fold(Uint128::zero(), |acc, q| {
        acc.checked_add(q.fee).map_err(StdError::from)
    })
}

fn validate_params(params: &DeployParams) -> Result<(), ContractError> {
    let invalid = |reason: &str| ContractError::InvalidParams {
        reason: reason.to_string(),
    };
    if params.name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    if params.symbol.trim().is_empty() {
        return Err(invalid("symbol is empty"));
    }
    if params.decimals > MAX_NATIVE_DECIMALS {
        return Err(invalid("decimals exceed 18"));
    }
    if params.owner.is_empty() {
        return Err(invalid("owner is empty"));
    }
    Ok(())
}

// ============================================================================
// Deploy
// ============================================================================

pub fn execute_deploy(
    deps: DepsMut,
    info: MessageInfo,
    dst_chain_ids: Vec<u64>,
    params: DeployParams,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    validate_params(&params)?;

    let quotes = quote_deployments(deps.as_ref(), &config, &dst_chain_ids)?;
    let total = total_fee(&quotes)?;

    let mut paid = Uint128::zero();
    for coin in &info.funds {
        if coin.denom != config.payment_denom {
            return Err(ContractError::InvalidConfig {
                reason: format!(
                    "unexpected denom {}, deployments are paid in {}",
                    coin.denom, config.payment_denom
                ),
            });
        }
        paid = paid.checked_add(coin.amount).map_err(StdError::from)?;
    }
    if paid < total {
        return Err(ContractError::InsufficientPayment {
            expected: total,
            got: paid,
        });
    }

    let mut response = Response::new();
    for quote in &quotes {
        let funds = if quote.fee.is_zero() {
            vec![]
        } else {
            vec![Coin::new(quote.fee.u128(), &config.payment_denom)]
        };
        response = response
            .add_message(WasmMsg::Execute {
                contract_addr: config.master_router.to_string(),
                msg: to_json_binary(&MasterRouterExecuteMsg::Send {
                    dst_chain_id: quote.chain_id,
                    protocol_id: config.protocol_id,
                    operation: Operation::Deploy {
                        params: params.clone(),
                    },
                    gas_limit_hint: quote.deploy_gas_limit,
                })?,
                funds,
            })
            .add_event(
                Event::new("deploy_requested")
                    .add_attribute("dst_chain_id", quote.chain_id.to_string())
                    .add_attribute("symbol", &params.symbol)
                    .add_attribute("owner", &params.owner)
                    .add_attribute("fee", quote.fee.to_string()),
            );
    }

    let refund = paid - total;
    if !refund.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin::new(refund.u128(), &config.payment_denom)],
        });
    }

    Ok(response
        .add_attribute("action", "deploy")
        .add_attribute("sender", info.sender)
        .add_attribute("chains", quotes.len().to_string())
        .add_attribute("total_fee", total.to_string())
        .add_attribute("refund", refund.to_string()))
}

// ============================================================================
// Admin
// ============================================================================

/// Write per-chain deploy settings and recount the enabled chains.
pub fn execute_set_dst_deploy_config(
    deps: DepsMut,
    info: MessageInfo,
    chain_ids: Vec<u64>,
    configs: Vec<DstDeployConfig>,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    if chain_ids.len() != configs.len() {
        return Err(ContractError::ArityMismatch {
            left: chain_ids.len(),
            right: configs.len(),
        });
    }

    let mut seen = BTreeSet::new();
    for (chain_id, config) in chain_ids.iter().zip(&configs) {
        if *chain_id == 0 || !seen.insert(*chain_id) {
            return Err(ContractError::InvalidConfig {
                reason: format!("invalid or duplicate chain id {chain_id}"),
            });
        }
        if config.deploy_gas_limit == 0 || config.deploy_gas_limit > MAX_GAS_LIMIT {
            return Err(ContractError::InvalidConfig {
                reason: format!(
                    "deploy gas limit for chain {chain_id} must be in 1..={MAX_GAS_LIMIT}"
                ),
            });
        }
    }

    let mut available = AVAILABLE_CHAINS.load(deps.storage)?;
    for (chain_id, config) in chain_ids.iter().zip(&configs) {
        let was_enabled = DST_DEPLOY_CONFIGS
            .may_load(deps.storage, *chain_id)?
            .map_or(false, |c| c.enabled);
        match (was_enabled, config.enabled) {
            (false, true) => available += 1,
            (true, false) => available -= 1,
            _ => {}
        }
        DST_DEPLOY_CONFIGS.save(deps.storage, *chain_id, config)?;
    }
    AVAILABLE_CHAINS.save(deps.storage, &available)?;

    Ok(Response::new()
        .add_attribute("action", "set_dst_deploy_config")
        .add_attribute("chains", chain_ids.len().to_string())
        .add_attribute("available_chains", available.to_string()))
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
