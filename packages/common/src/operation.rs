//! Cross-Chain Operation Codec
//!
//! An operation travels between MasterRouters as a binary envelope. The
//! leading four bytes are the operation selector, so a receiver can route the
//! payload before touching the body.
//!
//! # Byte Layout
//! ```text
//! | selector (4) | protocol_id (4) | src_chain_id (8) | dst_chain_id (8) |
//! | sender (32)  | gas_limit_hint (8) | body (JSON, variable)            |
//! ```
//! All integers are big-endian. The body is the JSON encoding of the
//! `Operation` and must decode to the same kind as the selector.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_vec, Binary, Coin, StdError, StdResult, Uint128};

use crate::hash::keccak256;

pub const SELECTOR_LEN: usize = 4;

/// Fixed-size part of the envelope preceding the body
pub const ENVELOPE_HEADER_LEN: usize = SELECTOR_LEN + 4 + 8 + 8 + 32 + 8;

pub type Selector = [u8; SELECTOR_LEN];

// ============================================================================
// Operation Kinds
// ============================================================================

#[cw_serde]
#[derive(Copy, Eq)]
pub enum OperationKind {
    Mint,
    Burn,
    CreditTransfer,
    Update,
    PaymentTransfer,
    Deploy,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Mint,
        OperationKind::Burn,
        OperationKind::CreditTransfer,
        OperationKind::Update,
        OperationKind::PaymentTransfer,
        OperationKind::Deploy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Mint => "mint",
            OperationKind::Burn => "burn",
            OperationKind::CreditTransfer => "credit_transfer",
            OperationKind::Update => "update",
            OperationKind::PaymentTransfer => "payment_transfer",
            OperationKind::Deploy => "deploy",
        }
    }

    /// Canonical signature hashed into the selector
    pub fn signature(&self) -> &'static str {
        match self {
            OperationKind::Mint => "mint(string,string,uint128)",
            OperationKind::Burn => "burn(string,uint128)",
            OperationKind::CreditTransfer => "creditTransfer(string,string,uint128)",
            OperationKind::Update => "update(string,bytes)",
            OperationKind::PaymentTransfer => "paymentTransfer(string,string,uint128)",
            OperationKind::Deploy => "deployToken(string,string,uint8,uint128,string)",
        }
    }

    pub fn selector(&self) -> Selector {
        let hash = keccak256(self.signature().as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    pub fn from_selector(selector: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.selector().as_slice() == selector)
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Construction parameters for a remotely deployed token
#[cw_serde]
pub struct DeployParams {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_supply: Uint128,
    /// Owner of the new token on the destination chain
    pub owner: String,
}

/// Closed set of destination-side actions
#[cw_serde]
pub enum Operation {
    /// Mint bridged tokens to a recipient
    Mint {
        token: String,
        recipient: String,
        amount: Uint128,
    },
    /// Burn tokens held by the Router (supply sync)
    Burn { token: String, amount: Uint128 },
    /// Release tokens held by the Router to a recipient
    CreditTransfer {
        token: String,
        recipient: String,
        amount: Uint128,
    },
    /// Forward a raw execute message to a registered token
    Update { token: String, msg: Binary },
    /// Pay native funds held by the Router
    PaymentTransfer { recipient: String, amount: Coin },
    /// Deploy a new token through the factory
    Deploy { params: DeployParams },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Mint { .. } => OperationKind::Mint,
            Operation::Burn { .. } => OperationKind::Burn,
            Operation::CreditTransfer { .. } => OperationKind::CreditTransfer,
            Operation::Update { .. } => OperationKind::Update,
            Operation::PaymentTransfer { .. } => OperationKind::PaymentTransfer,
            Operation::Deploy { .. } => OperationKind::Deploy,
        }
    }

    /// Token program targeted by this operation, if any
    pub fn token(&self) -> Option<&str> {
        match self {
            Operation::Mint { token, .. }
            | Operation::Burn { token, .. }
            | Operation::CreditTransfer { token, .. }
            | Operation::Update { token, .. } => Some(token.as_str()),
            Operation::PaymentTransfer { .. } | Operation::Deploy { .. } => None,
        }
    }
}

// ============================================================================
// Envelope
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct OperationEnvelope {
    pub protocol_id: u32,
    pub src_chain_id: u64,
    pub dst_chain_id: u64,
    /// 32-byte canonical address of the originator on the source chain
    pub sender: [u8; 32],
    /// Gas the sender paid for on the destination chain
    pub gas_limit_hint: u64,
    pub operation: Operation,
}

impl OperationEnvelope {
    pub fn encode(&self) -> StdResult<Vec<u8>> {
        let body = to_json_vec(&self.operation)?;
        let mut data = Vec::with_capacity(ENVELOPE_HEADER_LEN + body.len());

        data.extend_from_slice(&self.operation.kind().selector());
        data.extend_from_slice(&self.protocol_id.to_be_bytes());
        data.extend_from_slice(&self.src_chain_id.to_be_bytes());
        data.extend_from_slice(&self.dst_chain_id.to_be_bytes());
        data.extend_from_slice(&self.sender);
        data.extend_from_slice(&self.gas_limit_hint.to_be_bytes());
        data.extend_from_slice(&body);

        Ok(data)
    }

    pub fn decode(bytes: &[u8]) -> StdResult<Self> {
        if bytes.len() < ENVELOPE_HEADER_LEN {
            return Err(StdError::generic_err(format!(
                "Payload too short: expected at least {} bytes, got {}",
                ENVELOPE_HEADER_LEN,
                bytes.len()
            )));
        }

        let selector = &bytes[0..4];
        let kind = OperationKind::from_selector(selector).ok_or_else(|| {
            StdError::generic_err(format!("Unknown selector 0x{}", hex::encode(selector)))
        })?;

        let protocol_id = u32::from_be_bytes(read_array(bytes, 4));
        let src_chain_id = u64::from_be_bytes(read_array(bytes, 8));
        let dst_chain_id = u64::from_be_bytes(read_array(bytes, 16));
        let sender: [u8; 32] = read_array(bytes, 24);
        let gas_limit_hint = u64::from_be_bytes(read_array(bytes, 56));

        let operation: Operation = from_json(&bytes[ENVELOPE_HEADER_LEN..])?;
        if operation.kind() != kind {
            return Err(StdError::generic_err(format!(
                "Selector mismatch: header says {}, body is {}",
                kind.as_str(),
                operation.kind().as_str()
            )));
        }

        Ok(Self {
            protocol_id,
            src_chain_id,
            dst_chain_id,
            sender,
            gas_limit_hint,
            operation,
        })
    }
}

/// Copy a fixed-size window out of a slice whose length was already checked
fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    out
}
