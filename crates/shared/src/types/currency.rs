//! Supported currency codes.
//!
//! The set is closed: a currency outside this enum cannot be represented,
//! so there is no implicit conversion between codes.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Swiss Franc
    Chf,
    /// Euro
    Eur,
    /// Indonesian Rupiah
    Idr,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Every supported currency, in declaration order.
    pub const ALL: [Self; 5] = [Self::Usd, Self::Chf, Self::Eur, Self::Idr, Self::Jpy];

    /// Returns the upper-case ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Chf => "CHF",
            Self::Eur => "EUR",
            Self::Idr => "IDR",
            Self::Jpy => "JPY",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "CHF" => Ok(Self::Chf),
            "EUR" => Ok(Self::Eur),
            "IDR" => Ok(Self::Idr),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
