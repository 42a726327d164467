//! Execute and reply handlers for the Router contract.

use common::access::{self, grant_role_checked, revoke_role_checked};
use common::interface::FactoryExecuteMsg;
use common::{ExecutionResult, ExecutionStatus, Operation, OperationKind, Role};
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, CosmosMsg, DepsMut, Event, MessageInfo, Reply,
    Response, StdResult, SubMsg, SubMsgResult, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{
    ActiveExecution, Config, GasLimits, ACTIVE_EXECUTION, CONFIG, GAS_LIMITS, REPLY_EXECUTE,
    STATS,
};

// ============================================================================
// Operation Execution
// ============================================================================

/// Downstream message for an operation, or the reason it cannot be built.
fn build_downstream(
    deps: &DepsMut,
    config: &Config,
    src_chain_id: u64,
    sender: &Binary,
    operation: Operation,
) -> Result<CosmosMsg, String> {
    let validate = |addr: &str, what: &str| -> Result<Addr, String> {
        deps.api
            .addr_validate(addr)
            .map_err(|e| format!("invalid {what} {addr}: {e}"))
    };
    let encode = |msg: &Cw20ExecuteMsg| to_json_binary(msg).map_err(|e| e.to_string());

    let msg = match operation {
        Operation::Mint {
            token,
            recipient,
            amount,
        } => {
            let token = validate(&token, "token")?;
            validate(&recipient, "recipient")?;
            wasm_execute(token, encode(&Cw20ExecuteMsg::Mint { recipient, amount })?)
        }
        Operation::Burn { token, amount } => {
            let token = validate(&token, "token")?;
            wasm_execute(token, encode(&Cw20ExecuteMsg::Burn { amount })?)
        }
        Operation::CreditTransfer {
            token,
            recipient,
            amount,
        } => {
            let token = validate(&token, "token")?;
            validate(&recipient, "recipient")?;
            wasm_execute(token, encode(&Cw20ExecuteMsg::Transfer { recipient, amount })?)
        }
        Operation::Update { token, msg } => wasm_execute(validate(&token, "token")?, msg),
        Operation::PaymentTransfer { recipient, amount } => BankMsg::Send {
            to_address: validate(&recipient, "recipient")?.into_string(),
            amount: vec![amount],
        }
        .into(),
        Operation::Deploy { params } => {
            let factory = config
                .factory
                .clone()
                .ok_or_else(|| "no factory configured".to_string())?;
            let msg = to_json_binary(&FactoryExecuteMsg::DeployToken {
                src_chain_id,
                deployer: sender.clone(),
                params,
            })
            .map_err(|e| e.to_string())?;
            wasm_execute(factory, msg)
        }
    };

    Ok(msg)
}

fn wasm_execute(contract: Addr, msg: Binary) -> CosmosMsg {
    WasmMsg::Execute {
        contract_addr: contract.into_string(),
        msg,
        funds: vec![],
    }
    .into()
}

/// Apply one operation (master router only).
pub fn execute_operation(
    deps: DepsMut,
    info: MessageInfo,
    src_chain_id: u64,
    nonce: u64,
    sender: Binary,
    paid_gas_limit: u64,
    operation: Operation,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.master_router {
        return Err(ContractError::Unauthorized);
    }
    if let Some(active) = ACTIVE_EXECUTION.may_load(deps.storage)? {
        return Err(ContractError::ExecutionInProgress {
            src_chain_id: active.src_chain_id,
            nonce: active.nonce,
        });
    }

    let kind = operation.kind();
    let mut active = ActiveExecution {
        src_chain_id,
        nonce,
        sender: sender.clone(),
        kind,
        status: ExecutionStatus::Pending,
    };

    let downstream = match build_downstream(&deps, &config, src_chain_id, &sender, operation) {
        Ok(msg) => msg,
        Err(reason) => return finish(deps, active, ExecutionResult::failed(reason)),
    };

    let gas_limit = GAS_LIMITS
        .load(deps.storage)?
        .for_kind(kind)
        .min(paid_gas_limit);
    active.status = ExecutionStatus::Executing;
    ACTIVE_EXECUTION.save(deps.storage, &active)?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(downstream, REPLY_EXECUTE).with_gas_limit(gas_limit))
        .add_attribute("action", "execute")
        .add_attribute("src_chain_id", src_chain_id.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("kind", kind.as_str())
        .add_attribute("gas_limit", gas_limit.to_string()))
}

/// Capture the downstream outcome. Never fails on a downstream error.
pub fn reply_execute(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != REPLY_EXECUTE {
        return Err(ContractError::UnknownReplyId { id: msg.id });
    }
    let active = ACTIVE_EXECUTION.load(deps.storage)?;
    ACTIVE_EXECUTION.remove(deps.storage);

    let result = match msg.result {
        SubMsgResult::Ok(response) => ExecutionResult::completed(response.data),
        SubMsgResult::Err(err) => ExecutionResult::failed(err),
    };
    finish(deps, active, result)
}

/// Record the outcome and emit the result events
fn finish(
    deps: DepsMut,
    mut active: ActiveExecution,
    result: ExecutionResult,
) -> Result<Response, ContractError> {
    active.status = result.status();

    let mut stats = STATS.load(deps.storage)?;
    if result.success {
        stats.completed += 1;
    } else {
        stats.failed += 1;
    }
    STATS.save(deps.storage, &stats)?;

    let mut event = Event::new("execution_result")
        .add_attribute("src_chain_id", active.src_chain_id.to_string())
        .add_attribute("nonce", active.nonce.to_string())
        .add_attribute("kind", active.kind.as_str())
        .add_attribute("status", active.status.as_str())
        .add_attribute("success", result.success.to_string());
    if let Some(data) = &result.return_data {
        event = event.add_attribute("return_data", data.to_base64());
    }

    let mut response = Response::new()
        .add_attribute("action", "execution_result")
        .set_data(to_json_binary(&result)?);

    if let Some(error) = &result.error {
        event = event.add_attribute("error", error);
        response = response.add_event(
            Event::new("execution_failed")
                .add_attribute("src_chain_id", active.src_chain_id.to_string())
                .add_attribute("nonce", active.nonce.to_string())
                .add_attribute("kind", active.kind.as_str())
                .add_attribute("error", error),
        );
    }

    Ok(response.add_event(event))
}

// ============================================================================
// Admin
// ============================================================================

pub fn execute_set_gas_limits(
    deps: DepsMut,
    info: MessageInfo,
    gas_limits: GasLimits,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;
    gas_limits.validate()?;
    GAS_LIMITS.save(deps.storage, &gas_limits)?;

    let mut response = Response::new().add_attribute("action", "set_gas_limits");
    for kind in OperationKind::ALL {
        response = response.add_attribute(kind.as_str(), gas_limits.for_kind(kind).to_string());
    }
    Ok(response)
}

pub fn execute_set_factory(
    deps: DepsMut,
    info: MessageInfo,
    factory: Option<String>,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    let factory = factory
        .map(|f| deps.api.addr_validate(&f))
        .transpose()?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.factory = factory.clone();
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_factory")
        .add_attribute(
            "factory",
            factory.map(|f| f.into_string()).unwrap_or_else(|| "none".to_string()),
        ))
}

pub fn execute_set_master_router(
    deps: DepsMut,
    info: MessageInfo,
    master_router: String,
) -> Result<Response, ContractError> {
    access::ensure_role(deps.storage, Role::Admin, &info.sender)?;

    let master_router = deps.api.addr_validate(&master_router)?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.master_router = master_router.clone();
        Ok(config)
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_master_router")
        .add_attribute("master_router", master_router))
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
