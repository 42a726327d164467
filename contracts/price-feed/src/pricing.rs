//! Price Packing and Fee Math
//!
//! ## Word Layout
//!
//! A group word holds four big-endian `u64` lanes. Slot 0 is the least
//! significant lane:
//!
//! ```text
//! bytes:  0..8     8..16    16..24   24..32
//! slot:   3        2        1        0
//! ```
//!
//! ## Conversion
//!
//! 1. `price18 = encoded * 10^(18 - dst_decimals)`
//! 2. `price_src = ceil(price18 * 10^src_decimals / 10^18)`
//! 3. `fee = price_src * gas_limit`
//!
//! Step 2 rounds up so a quote never undercharges.

use common::MAX_NATIVE_DECIMALS;
use cosmwasm_std::{Uint128, Uint256};

use crate::error::ContractError;

/// Number of 64-bit lanes in one group word
pub const PRICES_PER_WORD: usize = 4;

const LANE_BYTES: usize = 8;

pub fn pack_prices(prices: [u64; PRICES_PER_WORD]) -> Uint256 {
    let mut bytes = [0u8; 32];
    for (slot, price) in prices.iter().enumerate() {
        let end = 32 - LANE_BYTES * slot;
        bytes[end - LANE_BYTES..end].copy_from_slice(&price.to_be_bytes());
    }
    Uint256::from_be_bytes(bytes)
}

pub fn unpack_prices(word: Uint256) -> [u64; PRICES_PER_WORD] {
    let bytes = word.to_be_bytes();
    let mut prices = [0u64; PRICES_PER_WORD];
    for (slot, price) in prices.iter_mut().enumerate() {
        let end = 32 - LANE_BYTES * slot;
        let mut lane = [0u8; LANE_BYTES];
        lane.copy_from_slice(&bytes[end - LANE_BYTES..end]);
        *price = u64::from_be_bytes(lane);
    }
    prices
}

pub fn unpack_slot(word: Uint256, slot: u8) -> Result<u64, ContractError> {
    unpack_prices(word)
        .get(slot as usize)
        .copied()
        .ok_or_else(|| ContractError::InvalidConfig {
            reason: format!("slot {slot} out of range"),
        })
}

fn pow10(exp: u8) -> Uint256 {
    Uint256::from(10u128.pow(exp as u32))
}

/// Lift an encoded destination price to 18-decimal precision.
pub fn to_precision_18(encoded: u64, dst_decimals: u8) -> Result<Uint256, ContractError> {
    if dst_decimals > MAX_NATIVE_DECIMALS {
        return Err(ContractError::InvalidConfig {
            reason: format!("native decimals {dst_decimals} exceed {MAX_NATIVE_DECIMALS}"),
        });
    }
    Uint256::from(encoded)
        .checked_mul(pow10(MAX_NATIVE_DECIMALS - dst_decimals))
        .map_err(|e| ContractError::Std(e.into()))
}

/// Rescale an 18-decimal price to `src_decimals`, rounding up.
pub fn to_src_native(price18: Uint256, src_decimals: u8) -> Result<Uint256, ContractError> {
    if src_decimals > MAX_NATIVE_DECIMALS {
        return Err(ContractError::InvalidConfig {
            reason: format!("native decimals {src_decimals} exceed {MAX_NATIVE_DECIMALS}"),
        });
    }
    let scaled = price18
        .checked_mul(pow10(src_decimals))
        .map_err(|e| ContractError::Std(e.into()))?;
    let unit = pow10(MAX_NATIVE_DECIMALS);

    let quotient = scaled / unit;
    if scaled % unit == Uint256::zero() {
        Ok(quotient)
    } else {
        Ok(quotient + Uint256::one())
    }
}

/// Destination gas price expressed in source-native base units.
pub fn dst_gas_price_at_src_native(
    encoded: u64,
    dst_decimals: u8,
    src_decimals: u8,
) -> Result<Uint256, ContractError> {
    to_src_native(to_precision_18(encoded, dst_decimals)?, src_decimals)
}

/// `price * gas_limit`, failing `FeeOverflow` if it leaves the u128 range.
///
/// Destinations with at least 9 native decimals never overflow for any
/// encoded price and gas limits up to `MAX_GAS_LIMIT`. Below that the
/// bound depends on the live price, so it is enforced here per quote.
pub fn fee_for_gas(price: Uint256, gas_limit: u64) -> Result<Uint128, ContractError> {
    let overflow = || ContractError::FeeOverflow {
        price: price.to_string(),
        gas_limit,
    };
    let fee = price
        .checked_mul(Uint256::from(gas_limit))
        .map_err(|_| overflow())?;
    Uint128::try_from(fee).map_err(|_| overflow())
}
