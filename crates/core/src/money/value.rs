//! The `Money` leaf value.

use bourse_shared::Currency;
use serde::{Deserialize, Serialize};

use super::bank::Bank;
use super::error::{MoneyError, MoneyResult};
use super::expression::Expression;

/// An integer amount tagged with a currency.
///
/// Amounts are `i64` in the currency's smallest tracked unit and may be
/// negative. Values are never mutated; every operation returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// An amount of US dollars.
    #[must_use]
    pub const fn dollar(amount: i64) -> Self {
        Self::new(amount, Currency::Usd)
    }

    /// An amount of Swiss francs.
    #[must_use]
    pub const fn franc(amount: i64) -> Self {
        Self::new(amount, Currency::Chf)
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// The integer amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// The currency the amount is denominated in.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Converts this amount into `to` using the bank's rate.
    ///
    /// Division truncates toward zero, so `-3 CHF` at a rate of 2 becomes `-1 USD`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::MissingRate` if the bank has no rate from this
    /// currency into `to`.
    pub fn reduce(&self, bank: &Bank, to: Currency) -> MoneyResult<Self> {
        let rate = bank.rate(self.currency, to)?;
        // Rates are validated positive on registration, so this never divides by zero
        // and never hits `i64::MIN / -1`.
        let amount = self.amount.checked_div(rate).ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, to))
    }

    /// Scales the amount, keeping the currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the product leaves the `i64` range.
    pub fn times(&self, multiplier: i64) -> MoneyResult<Expression> {
        let amount = self
            .amount
            .checked_mul(multiplier)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency).into())
    }

    /// Defers addition of `addend` to reduction time. See [`Expression::plus`].
    #[must_use]
    pub fn plus(self, addend: impl Into<Expression>) -> Expression {
        Expression::from(self).plus(addend)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl std::str::FromStr for Money {
    type Err = String;

    /// Parses `"5 USD"`, `"5USD"` or `"-3 chf"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| format!("Missing currency code: {s}"))?;
        let (amount, code) = s.split_at(split);
        let amount = amount
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid amount in {s:?}: {e}"))?;
        let currency = code.parse::<Currency>()?;
        Ok(Self::new(amount, currency))
    }
}
