//! Message types for the MasterRouter contract

use common::{Operation, Role};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin};

pub use price_feed::msg::FeeQuote;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    /// Chain id of this chain
    pub chain_id: u64,
    pub registry: String,
    pub price_feed: String,
    pub endpoint: String,
    pub fee_collector: String,
    pub fee_denom: String,
    /// At most 10000
    pub protocol_fee_bps: u16,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Dispatch
    // ========================================================================
    /// Send an operation to `dst_chain_id`. Funds in `fee_denom` must cover
    /// the quoted fee for `gas_limit_hint`; any surplus is refunded.
    ///
    /// Authorization: Registry `Router` role holder, or a token registered
    /// on this chain
    Send {
        dst_chain_id: u64,
        protocol_id: u32,
        operation: Operation,
        gas_limit_hint: u64,
    },

    /// Deliver an inbound message
    ///
    /// Authorization: endpoint only
    Receive {
        src_chain_id: u64,
        /// 32-byte canonical address of the sending MasterRouter
        src_sender: Binary,
        nonce: u64,
        payload: Binary,
    },

    // ========================================================================
    // Admin
    // ========================================================================
    SetFeeCollector { fee_collector: String },

    /// Override the peer MasterRouter per chain (32-byte addresses)
    SetDstMasterRouter {
        chain_ids: Vec<u64>,
        addresses: Vec<Binary>,
    },

    /// Bind protocol ids to Router contracts
    SetRouters {
        protocol_ids: Vec<u32>,
        routers: Vec<String>,
    },

    SetProtocolFee { protocol_fee_bps: u16 },

    /// Send the accumulated protocol share to `recipient`
    WithdrawProtocolFees { recipient: String },

    Pause {},
    Unpause {},

    GrantRole { role: Role, account: String },
    RevokeRole { role: Role, account: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Effective peer for a chain
    #[returns(DstMasterRouterResponse)]
    DstMasterRouter { chain_id: u64 },

    #[returns(Option<Addr>)]
    Router { protocol_id: u32 },

    #[returns(FeeQuote)]
    EstimateFee { dst_chain_id: u64, gas_limit: u64 },

    #[returns(IsProcessedResponse)]
    IsProcessed { src_chain_id: u64, nonce: u64 },

    #[returns(OutboundNonceResponse)]
    OutboundNonce {},

    #[returns(ProtocolFeesResponse)]
    ProtocolFees {},

    #[returns(HasRoleResponse)]
    HasRole { role: Role, account: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub chain_id: u64,
    pub registry: Addr,
    pub price_feed: Addr,
    pub endpoint: Addr,
    pub fee_collector: Addr,
    pub fee_denom: String,
    pub protocol_fee_bps: u16,
    pub paused: bool,
}

#[cw_serde]
pub struct DstMasterRouterResponse {
    pub chain_id: u64,
    /// `None` when neither this contract nor the Registry knows the chain
    pub address: Option<Binary>,
    /// True when the address comes from this contract's own override
    pub is_override: bool,
}

#[cw_serde]
pub struct IsProcessedResponse {
    pub processed: bool,
}

#[cw_serde]
pub struct OutboundNonceResponse {
    /// Nonce the next `Send` will use
    pub next_nonce: u64,
}

#[cw_serde]
pub struct ProtocolFeesResponse {
    pub accrued: Coin,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}
