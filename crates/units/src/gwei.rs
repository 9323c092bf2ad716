//! Helpers for values commonly handled in GWei, such as gas prices.
use std::sync::LazyLock;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::{
    Wei,
    error::Result,
    format::format_wei,
    parse::parse_wei,
    unit::Unit,
};

/// Number of Wei in one GWei.
static WEI_PER_GWEI: LazyLock<BigUint> = LazyLock::new(|| Unit::GWei.multiplier());

/// Parses a string into a whole number of GWei.
///
/// Accepts everything [`parse_wei`] does. Any part of the value below 1 GWei
/// is dropped, and only the low 64 bits of the GWei count are kept.
pub fn parse_gwei(input: &str) -> Result<u64> {
    let gwei = parse_wei(input)? / &*WEI_PER_GWEI;
    Ok(gwei.iter_u64_digits().next().unwrap_or(0))
}

/// Formats a number of GWei the same way [`format_wei`] does.
pub fn format_gwei(amount: u64, standard: bool) -> String {
    format_wei(Some(&(BigUint::from(amount) * &*WEI_PER_GWEI)), standard)
}

/// Formats a number of Wei as GWei, keeping every digit.
///
/// `None` gives `"0"`.
pub fn format_wei_as_gwei(amount: Option<&Wei>) -> String {
    let Some(amount) = amount else { return "0".to_owned() };

    let (whole, remainder) = amount.div_rem(&*WEI_PER_GWEI);
    if remainder.is_zero() {
        return format!("{whole} GWei");
    }
    let fraction = format!("{remainder:09}");
    format!("{whole}.{} GWei", fraction.trim_end_matches('0'))
}
