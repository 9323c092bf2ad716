//! Formatting of Wei amounts as readable strings such as `"1.5 Ether"`.
//!
//! Decimal placement is done on the digit string rather than with floating
//! point so that no precision is lost for any magnitude.
use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::{Wei, unit::Unit};

/// Output for amounts above the largest known unit.
pub const OVERFLOW: &str = "overflow";

/// Working state for placing the decimal point of one amount.
#[derive(Debug)]
struct FormatPlan {
    /// Base-10 digits of the amount in the current unit
    digits: String,
    /// Power of 1000 the digits are currently expressed in
    unit_pos: usize,
    /// Power of 1000 the output should be expressed in
    target_pos: usize,
    /// Offset into `digits` where the decimal point goes; may be negative
    decimal_place: isize,
}

/// Divides out whole thousands, returning the remaining value and the unit
/// position it is expressed in.
fn descale(mut value: BigUint) -> (BigUint, usize) {
    let thousand = BigUint::from(1000u32);
    let mut unit_pos = 0;
    while value >= thousand {
        let (quotient, remainder) = value.div_rem(&thousand);
        if !remainder.is_zero() {
            break;
        }
        value = quotient;
        unit_pos += 1;
    }
    (value, unit_pos)
}

impl FormatPlan {
    /// Picks the unit to display `value` in, given it is currently a whole
    /// number at `unit_pos`.
    fn new(value: &BigUint, mut unit_pos: usize, standard: bool) -> Self {
        let digits = value.to_str_radix(10);

        // Each unit covers three digits.
        let mut target_pos = unit_pos;
        if digits.len() > 3 {
            target_pos += digits.len() / 3;
            if digits.len() % 3 == 0 {
                target_pos -= 1;
            }
        }
        if standard && target_pos > Unit::GWei.position() {
            // GWei covers anything below 0.001 Ether, everything larger is Ether.
            target_pos = if target_pos == Unit::Microether.position() {
                Unit::GWei.position()
            } else {
                Unit::Ether.position()
            };
        }

        let mut decimal_place = digits.len() as isize;
        while unit_pos < target_pos {
            decimal_place -= 3;
            unit_pos += 1;
        }

        Self { digits, unit_pos, target_pos, decimal_place }
    }

    /// Produces the final number text and the unit it is expressed in.
    fn render(self) -> (String, usize) {
        let Self { mut digits, mut unit_pos, target_pos, mut decimal_place } = self;

        while unit_pos > target_pos {
            digits.push_str("000");
            decimal_place += 3;
            unit_pos -= 1;
        }

        if decimal_place <= 0 {
            digits = format!("0.{}{digits}", "0".repeat(decimal_place.unsigned_abs()));
        } else if (decimal_place as usize) < digits.len() {
            digits.insert(decimal_place as usize, '.');
        }

        if digits.contains('.') {
            digits.truncate(digits.trim_end_matches('0').len());
        }

        (digits, unit_pos)
    }
}

/// Formats a number of Wei in the most readable unit.
///
/// With `standard` set the output is limited to Wei, KWei, MWei, GWei or
/// Ether. `None` and zero give `"0"`; amounts beyond Teraether give
/// `"overflow"`.
pub fn format_wei(amount: Option<&Wei>, standard: bool) -> String {
    let Some(amount) = amount else { return "0".to_owned() };
    if amount.is_zero() {
        return "0".to_owned();
    }

    let (value, unit_pos) = descale(amount.clone());
    let (number, unit_pos) = FormatPlan::new(&value, unit_pos, standard).render();

    match Unit::from_position(unit_pos) {
        Some(unit) => format!("{number} {unit}"),
        None => OVERFLOW.to_owned(),
    }
}

/// [`fmt::Display`] adapter returned by [`display_wei`].
#[derive(Debug, Clone, Copy)]
pub struct WeiDisplay<'a> {
    amount: &'a Wei,
    standard: bool,
}

impl fmt::Display for WeiDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_wei(Some(self.amount), self.standard))
    }
}

/// Wraps an amount so it can be used directly in `format!` and friends.
pub const fn display_wei(amount: &Wei, standard: bool) -> WeiDisplay<'_> {
    WeiDisplay { amount, standard }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn fmt(s: &str, standard: bool) -> String {
        format_wei(Some(&BigUint::from_str(s).unwrap()), standard)
    }

    #[test]
    fn zero_and_missing_amounts() {
        assert_eq!(format_wei(None, true), "0");
        assert_eq!(format_wei(None, false), "0");
        assert_eq!(fmt("0", true), "0");
    }

    #[test]
    fn wei_family() {
        let cases = [
            ("1", "1 Wei"),
            ("999", "999 Wei"),
            ("1000", "1 KWei"),
            ("1001", "1.001 KWei"),
            ("2034", "2.034 KWei"),
            ("999999", "999.999 KWei"),
            ("1000000", "1 MWei"),
            ("1000001", "1.000001 MWei"),
            ("999999999", "999.999999 MWei"),
            ("1000000000", "1 GWei"),
            ("1000000001", "1.000000001 GWei"),
            ("1234567890", "1.23456789 GWei"),
            ("999999999999", "999.999999999 GWei"),
        ];
        for (input, expected) in cases {
            assert_eq!(fmt(input, true), expected, "standard {input}");
            assert_eq!(fmt(input, false), expected, "metric {input}");
        }
    }

    #[test]
    fn standard_mode_keeps_gwei_below_a_milliether() {
        assert_eq!(fmt("1000000000000", true), "1000 GWei");
        assert_eq!(fmt("1000000000001", true), "1000.000000001 GWei");
        assert_eq!(fmt("999999999999999", true), "999999.999999999 GWei");
        assert_eq!(fmt("1000000000000000", true), "0.001 Ether");
        assert_eq!(fmt("1000000000000001", true), "0.001000000000000001 Ether");
        assert_eq!(fmt("999999999999999999", true), "0.999999999999999999 Ether");
    }

    #[test]
    fn metric_mode_uses_every_unit() {
        let cases = [
            ("1000000000000", "1 Microether"),
            ("1000000000001", "1.000000000001 Microether"),
            ("999999999999999", "999.999999999999 Microether"),
            ("1000000000000000", "1 Milliether"),
            ("1000000000000001", "1.000000000000001 Milliether"),
            ("999999999999999999", "999.999999999999999 Milliether"),
            ("1000000000000000000", "1 Ether"),
            ("1000000000000000000000", "1 Kiloether"),
            ("1000000000000000000001", "1.000000000000000000001 Kiloether"),
            ("1000000000000000000000000", "1 Megaether"),
            ("999999999999999999999999999", "999.999999999999999999999999 Megaether"),
            ("1000000000000000000000000000", "1 Gigaether"),
            ("1000000000000000000000000000000", "1 Teraether"),
            ("999999999999999999999999999999999", "999.999999999999999999999999999999 Teraether"),
        ];
        for (input, expected) in cases {
            assert_eq!(fmt(input, false), expected, "input {input}");
        }
    }

    #[test]
    fn standard_mode_shows_large_values_in_ether() {
        let cases = [
            ("1000000000000000000", "1 Ether"),
            ("1000000000000000001", "1.000000000000000001 Ether"),
            ("999999999999999999999", "999.999999999999999999 Ether"),
            ("1000000000000000000000", "1000 Ether"),
            ("1000000000000000000000001", "1000000.000000000000000001 Ether"),
            ("1000000000000000000000000000", "1000000000 Ether"),
            ("999999999999999999999999999999999", "999999999999999.999999999999999999 Ether"),
            ("1000000000000000000000000000000000", "1000000000000000 Ether"),
        ];
        for (input, expected) in cases {
            assert_eq!(fmt(input, true), expected, "input {input}");
        }
    }

    #[test]
    fn overflow_beyond_teraether() {
        assert_eq!(fmt("1000000000000000000000000000000000", false), OVERFLOW);
        assert_eq!(fmt("5000000000000000000000000000000000", false), OVERFLOW);
    }

    #[test]
    fn input_is_left_untouched() {
        let amount = BigUint::from(2_000_000u32);
        assert_eq!(format_wei(Some(&amount), false), "2 MWei");
        assert_eq!(amount, BigUint::from(2_000_000u32));
    }

    #[test]
    fn display_adapter_matches_format() {
        let amount = BigUint::from(1_500_000_000u64);
        assert_eq!(display_wei(&amount, true).to_string(), "1.5 GWei");
        assert_eq!(format!("[{}]", display_wei(&amount, false)), "[1.5 GWei]");
    }
}
