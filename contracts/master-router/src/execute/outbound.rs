//! Outbound dispatch (`Send`).

use common::interface::EndpointExecuteMsg;
use common::{
    addr_to_bytes32, bytes32_to_hex, Operation, OperationEnvelope, Role, BPS_DENOMINATOR,
    MAX_GAS_LIMIT,
};
use cosmwasm_std::{
    to_json_binary, BankMsg, Binary, Coin, DepsMut, Event, MessageInfo, Response, StdError,
    StdResult, Uint128, WasmMsg,
};

use super::{
    load_active_chain, peer_for, quote_fee, registry_has_role, registry_token_registered,
};
use crate::error::ContractError;
use crate::state::{CONFIG, OUTBOUND_NONCE, PROTOCOL_FEES};

/// Sum of attached `denom` funds; any other denom is rejected.
fn paid_amount(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    let mut paid = Uint128::zero();
    for coin in &info.funds {
        if coin.denom != denom {
            return Err(ContractError::InvalidConfig {
                reason: format!("unexpected denom {}, fees are paid in {}", coin.denom, denom),
            });
        }
        paid = paid.checked_add(coin.amount).map_err(StdError::from)?;
    }
    Ok(paid)
}

/// Send an operation to a remote chain.
///
/// Order of checks: pause switch, caller authorization, destination chain,
/// gas hint, fee. Nothing is written before all of them pass.
pub fn execute_send(
    deps: DepsMut,
    info: MessageInfo,
    dst_chain_id: u64,
    protocol_id: u32,
    operation: Operation,
    gas_limit_hint: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::Paused);
    }

    let sender = info.sender.as_str();
    if !registry_has_role(deps.as_ref(), &config, Role::Router, sender)?
        && !registry_token_registered(deps.as_ref(), &config, sender)?
    {
        return Err(ContractError::Unauthorized);
    }

    if dst_chain_id == config.chain_id {
        return Err(ContractError::InvalidConfig {
            reason: "destination is the local chain".to_string(),
        });
    }
    let chain = load_active_chain(deps.as_ref(), &config, dst_chain_id)?;
    let peer = peer_for(deps.as_ref(), &chain)?;

    if gas_limit_hint == 0 || gas_limit_hint > MAX_GAS_LIMIT {
        return Err(ContractError::InvalidConfig {
            reason: format!("gas limit hint must be in 1..={MAX_GAS_LIMIT}, got {gas_limit_hint}"),
        });
    }

    let quote = quote_fee(deps.as_ref(), &config, dst_chain_id, gas_limit_hint)?;
    let fee = quote.amount_in_src_native;
    let paid = paid_amount(&info, &config.fee_denom)?;
    if paid < fee {
        return Err(ContractError::InsufficientPayment {
            expected: fee,
            got: paid,
        });
    }

    let nonce = OUTBOUND_NONCE.load(deps.storage)?;
    OUTBOUND_NONCE.save(deps.storage, &(nonce + 1))?;

    let kind = operation.kind();
    let envelope = OperationEnvelope {
        protocol_id,
        src_chain_id: config.chain_id,
        dst_chain_id,
        sender: addr_to_bytes32(deps.api, &info.sender)?,
        gas_limit_hint,
        operation,
    };
    let payload = envelope.encode()?;

    let mut response = Response::new().add_message(WasmMsg::Execute {
        contract_addr: config.endpoint.to_string(),
        msg: to_json_binary(&EndpointExecuteMsg::Send {
            dst_chain_id,
            remote_router: Binary::from(peer.to_vec()),
            payload: Binary::from(payload),
        })?,
        funds: vec![],
    });

    // Fee split: protocol share stays here, the rest goes to the collector
    let protocol_share = fee.multiply_ratio(config.protocol_fee_bps as u128, BPS_DENOMINATOR);
    let collector_share = fee - protocol_share;
    if !protocol_share.is_zero() {
        PROTOCOL_FEES.update(deps.storage, |acc| -> StdResult<_> {
            Ok(acc.checked_add(protocol_share)?)
        })?;
    }
    if !collector_share.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: config.fee_collector.to_string(),
            amount: vec![Coin::new(collector_share.u128(), &config.fee_denom)],
        });
    }

    let refund = paid - fee;
    if !refund.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin::new(refund.u128(), &config.fee_denom)],
        });
    }

    Ok(response
        .add_event(
            Event::new("dispatch_sent")
                .add_attribute("dst_chain_id", dst_chain_id.to_string())
                .add_attribute("protocol_id", protocol_id.to_string())
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("kind", kind.as_str())
                .add_attribute("sender", info.sender.as_str())
                .add_attribute("remote_router", bytes32_to_hex(&peer))
                .add_attribute("gas_limit_hint", gas_limit_hint.to_string())
                .add_attribute("fee", fee.to_string())
                .add_attribute("refund", refund.to_string()),
        )
        .add_attribute("action", "send")
        .add_attribute("nonce", nonce.to_string()))
}
