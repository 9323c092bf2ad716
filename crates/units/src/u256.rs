//! Interop with the fixed-width [`U256`] used by Ethereum tooling.
use alloy_primitives::U256;
use num_bigint::BigUint;

use crate::Wei;

/// Converts a [`U256`] into an arbitrary-precision amount.
pub fn wei_from_u256(value: U256) -> Wei {
    BigUint::from_bytes_be(&value.to_be_bytes::<32>())
}

/// Converts an amount into a [`U256`], or `None` if it needs more than 256 bits.
pub fn wei_to_u256(amount: &Wei) -> Option<U256> {
    U256::try_from_be_slice(&amount.to_bytes_be())
}
