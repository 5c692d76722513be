//! Directional currency pair used as the bank's rate key.

use bourse_shared::Currency;

/// An ordered `(from, to)` currency pair.
///
/// `CHF->USD` and `USD->CHF` are distinct keys; neither is derived from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
}

impl Pair {
    /// Creates a new pair.
    #[must_use]
    pub const fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }

    /// Returns true if both sides are the same currency.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    /// Returns the pair pointing the other way.
    ///
    /// Never consulted for conversion; rates are not inverted implicitly.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
