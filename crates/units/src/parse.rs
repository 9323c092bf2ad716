//! Parsing of human-readable values such as `"0.05 ether"` into Wei.
use std::{str::FromStr, sync::LazyLock};

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    Wei,
    error::{ConversionError, Result},
    unit::unit_multiplier,
};

/// Optional sign, digits with at most one period, then an optional unit name.
static VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]*(?:\.[0-9]*)?)([A-Za-z]+)?$").expect("value pattern is valid")
});

/// A value string split into its number and unit, before any arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedComponents {
    /// Numeric literal as written, sign and period included
    pub literal: String,
    /// Whether the literal starts with `-`
    pub negative: bool,
    /// Digits before the period
    pub integer: String,
    /// Digits after the period, if the literal has one
    pub fraction: Option<String>,
    /// Unit name, empty when none was given
    pub unit: String,
}

impl ParsedComponents {
    /// Converts the components to a signed number of Wei.
    ///
    /// The sign belongs to the integer part only; the fraction is always added.
    fn signed_wei(&self) -> Result<BigInt> {
        let failure = || ConversionError::parse_failure(&self.literal, &self.unit);
        let multiplier = unit_multiplier(&self.unit).map_err(|_| failure())?;

        // ".5 ether" has no integer digits, which only makes sense with a fraction.
        let signed_integer = self.literal.split('.').next().unwrap_or_default();
        let whole = if signed_integer.is_empty() && self.fraction.is_some() {
            BigInt::zero()
        } else {
            let number = BigInt::from_str(signed_integer).map_err(|_| failure())?;
            number * BigInt::from(multiplier.clone())
        };

        let Some(fraction) = self.fraction.as_deref() else { return Ok(whole) };
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            return Ok(whole);
        }

        // Shift the multiplier right by the fraction length so the fraction can
        // be multiplied as an integer.
        let mut scale = multiplier;
        for _ in 0..fraction.len() {
            scale /= 10u32;
            if scale.is_zero() {
                return Err(ConversionError::Fractional);
            }
        }
        let digits = BigUint::from_str(fraction).map_err(|_| failure())?;

        Ok(whole + BigInt::from(scale * digits))
    }

    /// Converts the components to a number of Wei.
    pub fn to_wei(&self) -> Result<Wei> {
        self.signed_wei()?.to_biguint().ok_or(ConversionError::Negative)
    }
}

/// Splits `input` into its numeric literal and unit name.
///
/// Spaces and underscores are removed first, wherever they are.
pub fn components(input: &str) -> Result<ParsedComponents> {
    if input.is_empty() {
        return Err(ConversionError::EmptyValue);
    }

    let stripped: String = input.chars().filter(|c| !matches!(c, ' ' | '_')).collect();
    let captures = VALUE.captures(&stripped).ok_or(ConversionError::InvalidFormat)?;
    let literal = captures.get(1).map_or("", |m| m.as_str());
    let unit = captures.get(2).map_or("", |m| m.as_str());

    let (negative, unsigned) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction.to_owned())),
        None => (unsigned, None),
    };

    Ok(ParsedComponents {
        literal: literal.to_owned(),
        negative,
        integer: integer.to_owned(),
        fraction,
        unit: unit.to_owned(),
    })
}

/// Parses a string into a number of Wei.
///
/// The string is a plain number of Wei (`"1000000000000000"`) or a number
/// followed by a unit (`"10 ether"`, `"0.5 gwei"`). Unit names are
/// case-insensitive. The decimal separator is always a period.
pub fn parse_wei(input: &str) -> Result<Wei> {
    let result = components(input).and_then(|parts| parts.to_wei());
    match &result {
        Ok(wei) => trace!(input, %wei, "parsed value"),
        Err(err) => debug!(input, %err, "rejected value"),
    }
    result
}
