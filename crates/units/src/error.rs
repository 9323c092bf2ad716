//! Conversion errors.
use derive_more::{Display, Error};

/// Errors returned when a value cannot be converted to Wei.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConversionError {
    /// The input string was empty
    #[display("failed to parse empty value")]
    EmptyValue,
    /// The input does not look like `<number> <unit>`
    #[display("invalid format")]
    InvalidFormat,
    /// The unit name is not in the unit table
    #[display("unknown unit {unit}")]
    UnknownUnit {
        /// Unit token as given, after separator stripping
        unit: String,
    },
    /// The value needs more precision than a single Wei
    #[display("value resulted in fractional number of Wei")]
    Fractional,
    /// The value is below zero
    #[display("value resulted in negative number of Wei")]
    Negative,
    /// The numeric literal or its unit could not be read
    #[display("failed to parse {literal} {unit}")]
    ParseFailure {
        /// Numeric literal that was being converted
        literal: String,
        /// Unit text that accompanied the literal
        unit: String,
    },
}

impl ConversionError {
    pub(crate) fn parse_failure(literal: &str, unit: &str) -> Self {
        Self::ParseFailure { literal: literal.to_owned(), unit: unit.to_owned() }
    }
}

/// Result alias for conversions.
pub type Result<T> = std::result::Result<T, ConversionError>;
