//! Serde helpers for [`Wei`] fields.
//!
//! Use with `#[serde(with = "units::serde_wei")]`. Values serialize as a
//! base-10 Wei string. Deserialization accepts anything [`parse_wei`] does,
//! so `"21 gwei"` and `"0.5 ether"` are valid, as well as JSON integers.
use std::fmt;

use num_bigint::BigUint;
use serde::{
    Deserializer, Serializer,
    de::{self, Visitor},
};

use crate::{Wei, parse::parse_wei};

/// Serializes an amount as a base-10 Wei string.
pub fn serialize<S: Serializer>(amount: &Wei, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(amount)
}

/// Deserializes an amount from a unit string or an unsigned integer.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Wei, D::Error> {
    deserializer.deserialize_any(WeiVisitor)
}

struct WeiVisitor;

impl Visitor<'_> for WeiVisitor {
    type Value = Wei;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an amount such as \"1.5 ether\" or a number of Wei")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigUint::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(BigUint::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(BigUint::from)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_wei(v).map_err(E::custom)
    }
}
