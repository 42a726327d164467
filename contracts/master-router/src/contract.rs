//! Omnichain MasterRouter - Entry Points

use common::{access, Role};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_grant_role, execute_pause, execute_receive, execute_revoke_role, execute_send,
    execute_set_dst_master_router, execute_set_fee_collector, execute_set_protocol_fee,
    execute_set_routers, execute_unpause, execute_withdraw_protocol_fees, reply_router_execute,
    MAX_PROTOCOL_FEE_BPS,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_dst_master_router, query_estimate_fee, query_has_role,
    query_is_processed, query_outbound_nonce, query_protocol_fees, query_router,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, OUTBOUND_NONCE, PROTOCOL_FEES,
};

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

    if msg.chain_id == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "chain id 0 is reserved".to_string(),
        });
    }
    if msg.fee_denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "fee denom is empty".to_string(),
        });
    }
    if msg.protocol_fee_bps > MAX_PROTOCOL_FEE_BPS {
        return Err(ContractError::InvalidConfig {
            reason: format!(
                "protocol fee {} bps exceeds {}",
                msg.protocol_fee_bps, MAX_PROTOCOL_FEE_BPS
            ),
        });
    }

    let admin = deps.api.addr_validate(&msg.admin)?;
    let config = Config {
        chain_id: msg.chain_id,
        registry: deps.api.addr_validate(&msg.registry)?,
        price_feed: deps.api.addr_validate(&msg.price_feed)?,
        endpoint: deps.api.addr_validate(&msg.endpoint)?,
        fee_collector: deps.api.addr_validate(&msg.fee_collector)?,
        fee_denom: msg.fee_denom,
        protocol_fee_bps: msg.protocol_fee_bps,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;
    OUTBOUND_NONCE.save(deps.storage, &0u64)?;
    PROTOCOL_FEES.save(deps.storage, &Uint128::zero())?;
    access::grant_role(deps.storage, Role::Admin, &admin)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("chain_id", config.chain_id.to_string())
        .add_attribute("endpoint", config.endpoint))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Dispatch
        ExecuteMsg::Send {
            dst_chain_id,
            protocol_id,
            operation,
            gas_limit_hint,
        } => execute_send(deps, info, dst_chain_id, protocol_id, operation, gas_limit_hint),
        ExecuteMsg::Receive {
            src_chain_id,
            src_sender,
            nonce,
            payload,
        } => execute_receive(deps, info, src_chain_id, src_sender, nonce, payload),

        // Configuration
        ExecuteMsg::SetFeeCollector { fee_collector } => {
            execute_set_fee_collector(deps, info, fee_collector)
        }
        ExecuteMsg::SetDstMasterRouter {
            chain_ids,
            addresses,
        } => execute_set_dst_master_router(deps, info, chain_ids, addresses),
        ExecuteMsg::SetRouters {
            protocol_ids,
            routers,
        } => execute_set_routers(deps, info, protocol_ids, routers),

        // Fees
        ExecuteMsg::SetProtocolFee { protocol_fee_bps } => {
            execute_set_protocol_fee(deps, info, protocol_fee_bps)
        }
        ExecuteMsg::WithdrawProtocolFees { recipient } => {
            execute_withdraw_protocol_fees(deps, info, recipient)
        }

        // Admin operations
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    reply_router_execute(deps, msg)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::DstMasterRouter { chain_id } => {
            to_json_binary(&query_dst_master_router(deps, chain_id)?)
        }
        QueryMsg::Router { protocol_id } => to_json_binary(&query_router(deps, protocol_id)?),
        QueryMsg::EstimateFee {
            dst_chain_id,
            gas_limit,
        } => to_json_binary(&query_estimate_fee(deps, dst_chain_id, gas_limit)?),
        QueryMsg::IsProcessed {
            src_chain_id,
            nonce,
        } => to_json_binary(&query_is_processed(deps, src_chain_id, nonce)?),
        QueryMsg::OutboundNonce {} => to_json_binary(&query_outbound_nonce(deps)?),
        QueryMsg::ProtocolFees {} => to_json_binary(&query_protocol_fees(deps)?),
        QueryMsg::HasRole { role, account } => to_json_binary(&query_has_role(deps, role, account)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
