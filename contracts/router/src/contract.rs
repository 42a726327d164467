//! Omnichain Router - Entry Points

use common::{access, Role};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_grant_role, execute_operation, execute_revoke_role, execute_set_factory,
    execute_set_gas_limits, execute_set_master_router, reply_execute,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_gas_limits, query_has_role, query_stats};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, GAS_LIMITS, STATS,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let master_router = deps.api.addr_validate(&msg.master_router)?;
    let factory = msg
        .factory
        .map(|f| deps.api.addr_validate(&f))
        .transpose()?;
    msg.gas_limits.validate()?;

    access::grant_role(deps.storage, Role::Admin, &admin)?;
    CONFIG.save(
        deps.storage,
        &Config {
            master_router: master_router.clone(),
            factory,
        },
    )?;
    GAS_LIMITS.save(deps.storage, &msg.gas_limits)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("master_router", master_router))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Execute {
            src_chain_id,
            nonce,
            sender,
            gas_limit,
            operation,
        } => execute_operation(deps, info, src_chain_id, nonce, sender, gas_limit, operation),
        ExecuteMsg::SetGasLimits { gas_limits } => execute_set_gas_limits(deps, info, gas_limits),
        ExecuteMsg::SetFactory { factory } => execute_set_factory(deps, info, factory),
        ExecuteMsg::SetMasterRouter { master_router } => {
            execute_set_master_router(deps, info, master_router)
        }
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    reply_execute(deps, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::GasLimits {} => to_json_binary(&query_gas_limits(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::HasRole { role, account } => to_json_binary(&query_has_role(deps, role, account)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
