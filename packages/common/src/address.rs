//! 32-Byte Canonical Addresses
//!
//! Remote routers and operation senders travel between chains as fixed
//! 32-byte values so that chains with different address formats compare
//! them byte-for-byte.
//!
//! Local addresses are folded as follows:
//! - canonical form of 32 bytes or fewer is left-padded with zeros
//! - longer canonical forms are replaced by their keccak256 digest

use cosmwasm_std::{Addr, Api, Binary, StdError, StdResult};

use crate::hash::keccak256;

/// Parse a Binary that must be exactly 32 bytes
pub fn to_bytes32(bytes: &Binary) -> StdResult<[u8; 32]> {
    bytes.as_slice().try_into().map_err(|_| {
        StdError::generic_err(format!(
            "Invalid address length: expected 32 bytes, got {}",
            bytes.len()
        ))
    })
}

/// Fold a local address into its 32-byte canonical form
pub fn addr_to_bytes32(api: &dyn Api, addr: &Addr) -> StdResult<[u8; 32]> {
    let canonical = api.addr_canonicalize(addr.as_str())?;
    let raw = canonical.as_slice();

    if raw.len() > 32 {
        return Ok(keccak256(raw));
    }

    let mut result = [0u8; 32];
    result[32 - raw.len()..].copy_from_slice(raw);
    Ok(result)
}

/// Convert bytes32 to a 0x-prefixed hex string
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Zero bytes mean "unset" for remote router slots
pub fn is_zero(bytes: &[u8; 32]) -> bool {
    bytes.iter().all(|b| *b == 0)
}
