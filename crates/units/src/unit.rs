//! Ether denominations and the alias table used to look them up.
use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use num_bigint::BigUint;

use crate::error::{ConversionError, Result};

/// Every accepted unit name (lowercase) and the denomination it refers to.
static ALIASES: LazyLock<HashMap<&'static str, Unit>> = LazyLock::new(|| {
    HashMap::from([
        ("", Unit::Wei),
        ("wei", Unit::Wei),
        ("ada", Unit::KWei),
        ("kwei", Unit::KWei),
        ("kilowei", Unit::KWei),
        ("babbage", Unit::MWei),
        ("mwei", Unit::MWei),
        ("megawei", Unit::MWei),
        ("shannon", Unit::GWei),
        ("gwei", Unit::GWei),
        ("gigawei", Unit::GWei),
        ("szazbo", Unit::Microether),
        ("micro", Unit::Microether),
        ("microether", Unit::Microether),
        ("finney", Unit::Milliether),
        ("milli", Unit::Milliether),
        ("milliether", Unit::Milliether),
        ("eth", Unit::Ether),
        ("ether", Unit::Ether),
        ("einstein", Unit::Kiloether),
        ("kilo", Unit::Kiloether),
        ("kiloether", Unit::Kiloether),
        ("mega", Unit::Megaether),
        ("megaether", Unit::Megaether),
        ("giga", Unit::Gigaether),
        ("gigaether", Unit::Gigaether),
        ("tera", Unit::Teraether),
        ("teraether", Unit::Teraether),
    ])
});

/// Ether denominations, ordered by size. Each step is a factor of 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    /// 1 Wei
    Wei,
    /// 10^3 Wei
    KWei,
    /// 10^6 Wei
    MWei,
    /// 10^9 Wei
    GWei,
    /// 10^12 Wei
    Microether,
    /// 10^15 Wei
    Milliether,
    /// 10^18 Wei
    Ether,
    /// 10^21 Wei
    Kiloether,
    /// 10^24 Wei
    Megaether,
    /// 10^27 Wei
    Gigaether,
    /// 10^30 Wei
    Teraether,
}

impl Unit {
    /// All units from smallest to largest.
    pub const ALL: [Self; 11] = [
        Self::Wei,
        Self::KWei,
        Self::MWei,
        Self::GWei,
        Self::Microether,
        Self::Milliether,
        Self::Ether,
        Self::Kiloether,
        Self::Megaether,
        Self::Gigaether,
        Self::Teraether,
    ];

    /// Power of 1000 this unit represents, i.e. its index in [`Unit::ALL`].
    pub const fn position(self) -> usize {
        self as usize
    }

    /// Unit at the given power of 1000, if there is one.
    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wei => "Wei",
            Self::KWei => "KWei",
            Self::MWei => "MWei",
            Self::GWei => "GWei",
            Self::Microether => "Microether",
            Self::Milliether => "Milliether",
            Self::Ether => "Ether",
            Self::Kiloether => "Kiloether",
            Self::Megaether => "Megaether",
            Self::Gigaether => "Gigaether",
            Self::Teraether => "Teraether",
        }
    }

    /// Number of Wei in one of this unit. Computed on every call.
    pub fn multiplier(self) -> BigUint {
        BigUint::from(1000u32).pow(self.position() as u32)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = ConversionError;

    /// Looks up a unit by any of its names, ignoring case. An empty name is Wei.
    fn from_str(s: &str) -> Result<Self> {
        ALIASES
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ConversionError::UnknownUnit { unit: s.to_owned() })
    }
}

/// Returns the number of Wei in one of the named unit.
///
/// Names are case-insensitive and may be metric ("milliether") or historical
/// ("finney"). The empty string is Wei.
pub fn unit_multiplier(unit: &str) -> Result<BigUint> {
    unit.parse::<Unit>().map(Unit::multiplier)
}
