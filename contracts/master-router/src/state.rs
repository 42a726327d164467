//! State definitions for the MasterRouter contract

use common::OperationKind;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Chain id of this chain
    pub chain_id: u64,
    pub registry: Addr,
    pub price_feed: Addr,
    /// Transport endpoint; the only caller allowed to deliver inbound messages
    pub endpoint: Addr,
    pub fee_collector: Addr,
    /// Native denom fees are paid in
    pub fee_denom: String,
    /// Share of each fee kept by this contract, in basis points
    pub protocol_fee_bps: u16,
    pub paused: bool,
}

/// Inbound operation waiting for the Router's reply
#[cw_serde]
pub struct PendingInbound {
    pub src_chain_id: u64,
    pub nonce: u64,
    pub protocol_id: u32,
    pub kind: OperationKind,
    pub router: Addr,
}

pub const CONTRACT_NAME: &str = "crates.io:omnichain-master-router";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REPLY_ROUTER_EXECUTE: u64 = 1;

pub const CONFIG: Item<Config> = Item::new("config");

/// Peer MasterRouter per remote chain, overriding the Registry entry
/// Key: chain id, Value: 32-byte canonical address
pub const DST_MASTER_ROUTERS: Map<u64, [u8; 32]> = Map::new("dst_master_routers");

/// Key: protocol id
pub const ROUTERS: Map<u32, Addr> = Map::new("routers");

/// Replay guard
/// Key: (src chain id, nonce)
pub const RECEIVED: Map<(u64, u64), bool> = Map::new("received");

/// Next outbound nonce
pub const OUTBOUND_NONCE: Item<u64> = Item::new("outbound_nonce");

/// Protocol share of collected fees awaiting withdrawal
pub const PROTOCOL_FEES: Item<Uint128> = Item::new("protocol_fees");

pub const PENDING_INBOUND: Item<PendingInbound> = Item::new("pending_inbound");
