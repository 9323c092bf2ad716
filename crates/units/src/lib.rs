//! Exact conversion between Ether amounts written for humans and Wei.
//!
//! Parsing turns strings such as `"0.05 Ether"`, `"21 gwei"` or
//! `"1_000_000 wei"` into a [`Wei`] amount. Formatting goes the other way and
//! picks the most readable unit for the amount:
//!
//! ```
//! use units::{format_wei, parse_wei};
//!
//! let wei = parse_wei("0.024 ether").unwrap();
//! assert_eq!(wei.to_string(), "24000000000000000");
//! assert_eq!(format_wei(Some(&wei), true), "0.024 Ether");
//! assert_eq!(format_wei(Some(&wei), false), "24 Milliether");
//! ```
//!
//! All arithmetic is done on arbitrary-precision integers and digit strings,
//! never on floating point.

/// Conversion errors
pub mod error;
/// Integer to string formatting
pub mod format;
/// GWei helpers
pub mod gwei;
/// String to integer parsing
pub mod parse;
/// Serde field helpers
pub mod serde_wei;
/// Denominations and unit lookup
pub mod unit;
/// `U256` interop
pub mod u256;

/// An exact, non-negative number of Wei.
pub type Wei = num_bigint::BigUint;

pub use error::{ConversionError, Result};
pub use format::{WeiDisplay, display_wei, format_wei};
pub use gwei::{format_gwei, format_wei_as_gwei, parse_gwei};
pub use parse::{ParsedComponents, parse_wei};
pub use u256::{wei_from_u256, wei_to_u256};
pub use unit::{Unit, unit_multiplier};
