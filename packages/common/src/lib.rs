//! Common - Shared Types and Utilities for the Omnichain Router Contracts
//!
//! This package provides the pieces every router contract agrees on:
//! role tables, 32-byte canonical addresses, the cross-chain operation
//! codec, and the message shapes of the external collaborators
//! (transport endpoint, token factory).

pub mod access;
pub mod address;
pub mod execution;
pub mod hash;
pub mod interface;
pub mod operation;

pub use access::{AccessError, Role};
pub use address::{addr_to_bytes32, bytes32_to_hex, to_bytes32};
pub use execution::{ExecutionResult, ExecutionStatus};
pub use hash::keccak256;
pub use operation::{DeployParams, Operation, OperationEnvelope, OperationKind};

/// Upper bound for any gas limit accepted by the routers (2^32)
pub const MAX_GAS_LIMIT: u64 = 1 << 32;

/// Highest native-token precision a chain may be configured with
pub const MAX_NATIVE_DECIMALS: u8 = 18;

/// Basis points denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10_000;
