//! Inbound delivery (`Receive`) and the Router reply.

use common::{bytes32_to_hex, to_bytes32, ExecutionResult, Operation, OperationEnvelope};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Event, MessageInfo, Reply, Response, SubMsg,
    SubMsgResponse, SubMsgResult, WasmMsg,
};
use router::msg::ExecuteMsg as RouterExecuteMsg;

use super::{load_active_chain, peer_for, registry_remote_origin, registry_token_registered};
use crate::error::ContractError;
use crate::state::{
    Config, PendingInbound, CONFIG, PENDING_INBOUND, RECEIVED, REPLY_ROUTER_EXECUTE, ROUTERS,
};

/// Router event carrying the execution outcome
const ROUTER_RESULT_EVENT: &str = "wasm-execution_result";

/// Authenticate an inbound message and hand it to its Router.
///
/// Both hops are checked: the transport origin must be the source chain's
/// peer MasterRouter, and the envelope sender must be a Registry remote
/// origin permitted to perform the operation. The Router gets the gas the
/// sender paid for.
///
/// The Router call is a `reply_always` submessage, so a failing operation
/// never reverts the delivery; the nonce stays consumed either way.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    src_chain_id: u64,
    src_sender: Binary,
    nonce: u64,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.endpoint {
        return Err(ContractError::Unauthorized);
    }
    if config.paused {
        return Err(ContractError::Paused);
    }

    if RECEIVED.has(deps.storage, (src_chain_id, nonce)) {
        return Err(ContractError::ReplayedMessage {
            src_chain_id,
            nonce,
        });
    }

    // Origin must be the registered peer for the source chain
    let chain = load_active_chain(deps.as_ref(), &config, src_chain_id)?;
    let expected = peer_for(deps.as_ref(), &chain)?;
    let unknown_origin = || ContractError::UnknownOrigin {
        src_chain_id,
        sender: src_sender.to_base64(),
    };
    let origin = to_bytes32(&src_sender).map_err(|_| unknown_origin())?;
    if origin != expected {
        return Err(unknown_origin());
    }

    let envelope =
        OperationEnvelope::decode(&payload).map_err(|e| ContractError::InvalidConfig {
            reason: e.to_string(),
        })?;
    if envelope.src_chain_id != src_chain_id {
        return Err(unknown_origin());
    }
    if envelope.dst_chain_id != config.chain_id {
        return Err(ContractError::InvalidConfig {
            reason: format!(
                "message addressed to chain {}, this is chain {}",
                envelope.dst_chain_id, config.chain_id
            ),
        });
    }

    let router = ROUTERS
        .may_load(deps.storage, envelope.protocol_id)?
        .ok_or_else(|| ContractError::InvalidConfig {
            reason: format!("no router for protocol {}", envelope.protocol_id),
        })?;

    if let Some(token) = envelope.operation.token() {
        if !registry_token_registered(deps.as_ref(), &config, token)? {
            return Err(ContractError::TokenNotRegistered {
                token: token.to_string(),
            });
        }
    }

    let kind = envelope.operation.kind();
    if !origin_permitted(deps.as_ref(), &config, &envelope)? {
        return Err(ContractError::OriginNotPermitted {
            src_chain_id,
            sender: bytes32_to_hex(&envelope.sender),
            kind: kind.as_str().to_string(),
        });
    }

    RECEIVED.save(deps.storage, (src_chain_id, nonce), &true)?;
    PENDING_INBOUND.save(
        deps.storage,
        &PendingInbound {
            src_chain_id,
            nonce,
            protocol_id: envelope.protocol_id,
            kind,
            router: router.clone(),
        },
    )?;

    let router_msg = WasmMsg::Execute {
        contract_addr: router.to_string(),
        msg: to_json_binary(&RouterExecuteMsg::Execute {
            src_chain_id,
            nonce,
            sender: Binary::from(envelope.sender.to_vec()),
            gas_limit: envelope.gas_limit_hint,
            operation: envelope.operation,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(router_msg, REPLY_ROUTER_EXECUTE))
        .add_event(
            Event::new("dispatch_received")
                .add_attribute("src_chain_id", src_chain_id.to_string())
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("protocol_id", envelope.protocol_id.to_string())
                .add_attribute("kind", kind.as_str())
                .add_attribute("sender", bytes32_to_hex(&envelope.sender))
                .add_attribute("router", router.as_str()),
        )
        .add_attribute("action", "receive"))
}

/// Whether the Registry lets the envelope sender perform its operation.
///
/// Privileged origins may do anything. Token-bound origins may only mint,
/// burn or credit their own local counterpart.
fn origin_permitted(
    deps: Deps,
    config: &Config,
    envelope: &OperationEnvelope,
) -> Result<bool, ContractError> {
    let Some(origin) =
        registry_remote_origin(deps, config, envelope.src_chain_id, &envelope.sender)?
    else {
        return Ok(false);
    };
    if origin.privileged {
        return Ok(true);
    }

    let target = match &envelope.operation {
        Operation::Mint { token, .. }
        | Operation::Burn { token, .. }
        | Operation::CreditTransfer { token, .. } => token,
        _ => return Ok(false),
    };
    Ok(origin.local_token.as_deref() == Some(target.as_str()))
}

/// Read the Router's outcome from its `execution_result` event.
fn result_from_router(response: SubMsgResponse) -> ExecutionResult {
    let attrs = response
        .events
        .iter()
        .rev()
        .find(|e| e.ty == ROUTER_RESULT_EVENT)
        .map(|e| e.attributes.clone());

    let Some(attrs) = attrs else {
        return ExecutionResult::completed(response.data);
    };
    let value = |key: &str| {
        attrs
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.clone())
    };

    if value("success").as_deref() == Some("true") {
        let data = value("return_data").and_then(|d| Binary::from_base64(&d).ok());
        ExecutionResult::completed(data)
    } else {
        ExecutionResult::failed(value("error").unwrap_or_else(|| "unknown error".to_string()))
    }
}

/// Surface the Router outcome. Never fails because the operation failed.
pub fn reply_router_execute(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != REPLY_ROUTER_EXECUTE {
        return Err(ContractError::UnknownReplyId { id: msg.id });
    }
    let pending = PENDING_INBOUND.load(deps.storage)?;
    PENDING_INBOUND.remove(deps.storage);

    let result = match msg.result {
        SubMsgResult::Ok(response) => result_from_router(response),
        SubMsgResult::Err(err) => ExecutionResult::failed(err),
    };

    let mut event = Event::new("execution_result")
        .add_attribute("src_chain_id", pending.src_chain_id.to_string())
        .add_attribute("nonce", pending.nonce.to_string())
        .add_attribute("protocol_id", pending.protocol_id.to_string())
        .add_attribute("kind", pending.kind.as_str())
        .add_attribute("router", pending.router.as_str())
        .add_attribute("status", result.status().as_str())
        .add_attribute("success", result.success.to_string());

    let mut response = Response::new().add_attribute("action", "receive_result");
    if let Some(error) = &result.error {
        event = event.add_attribute("error", error);
        response = response.add_event(
            Event::new("execution_failed")
                .add_attribute("src_chain_id", pending.src_chain_id.to_string())
                .add_attribute("nonce", pending.nonce.to_string())
                .add_attribute("router", pending.router.as_str())
                .add_attribute("error", error),
        );
    }

    Ok(response
        .add_event(event)
        .set_data(to_json_binary(&result)?))
}
