//! Exchange-rate registry and the entry point for reducing expressions.
//!
//! The bank stores one integer multiplier per directional currency pair.
//! Dividing a `from` amount by the multiplier gives the `to` amount. The
//! identity rate is always 1 and never stored, and no rate is ever inferred:
//! a `CHF->USD` entry says nothing about `USD->CHF`.

use bourse_shared::Currency;
use bourse_shared::config::BankConfig;
use dashmap::DashMap;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::error::{MoneyError, MoneyResult};
use super::expression::Expression;
use super::pair::Pair;
use super::value::Money;

/// Exchange-rate registry.
///
/// The rate table is a sharded concurrent map, so a shared `&Bank` can take
/// new rates while other threads reduce expressions against it.
#[derive(Debug, Default)]
pub struct Bank {
    rates: DashMap<Pair, i64>,
}

impl Bank {
    /// Creates a bank with no registered rates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bank pre-loaded with `(from, to, multiplier)` rates.
    ///
    /// Later entries for the same pair overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns the first error [`Bank::add_rate`] reports for an entry.
    pub fn with_rates<I>(rates: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = (Currency, Currency, i64)>,
    {
        let bank = Self::new();
        for (from, to, multiplier) in rates {
            bank.add_rate(from, to, multiplier)?;
        }
        Ok(bank)
    }

    /// Creates a bank from the `[bank]` configuration section.
    ///
    /// This is where configured rates are validated.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::IdentityRate` or `MoneyError::InvalidRate` for the
    /// first configured rate the bank refuses.
    pub fn from_config(config: &BankConfig) -> MoneyResult<Self> {
        Self::with_rates(
            config
                .rates
                .iter()
                .map(|rate| (rate.from, rate.to, rate.multiplier)),
        )
    }

    /// Returns the multiplier for converting `from` into `to`.
    ///
    /// Same-currency lookups return 1 without touching the table. Unregistered
    /// pairs have no default rate.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::MissingRate` if `from -> to` was never registered.
    pub fn rate(&self, from: Currency, to: Currency) -> MoneyResult<i64> {
        let pair = Pair::new(from, to);
        if pair.is_identity() {
            return Ok(1);
        }

        match self.rates.get(&pair) {
            Some(rate) => Ok(*rate),
            None => {
                let reverse_registered = self.rates.contains_key(&pair.reversed());
                warn!(%pair, reverse_registered, "no exchange rate registered");
                Err(MoneyError::MissingRate { from, to })
            }
        }
    }

    /// Registers or overwrites the rate for `from -> to`.
    ///
    /// Multipliers must be positive. Identity pairs are rejected since their
    /// rate is fixed at 1.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::IdentityRate` if `from == to`, or
    /// `MoneyError::InvalidRate` if `multiplier <= 0`. The table is left
    /// unchanged on error.
    pub fn add_rate(&self, from: Currency, to: Currency, multiplier: i64) -> MoneyResult<()> {
        let pair = Pair::new(from, to);
        if pair.is_identity() {
            return Err(MoneyError::IdentityRate(from));
        }
        if multiplier <= 0 {
            return Err(MoneyError::InvalidRate {
                from,
                to,
                multiplier,
            });
        }

        let previous = self.rates.insert(pair, multiplier);
        debug!(%pair, multiplier, ?previous, "exchange rate registered");
        Ok(())
    }

    /// Number of explicitly registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rates have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Reduces `expression` to a single amount in `to`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::MissingRate` if any leaf has no rate into `to`,
    /// or `MoneyError::Overflow` if the total leaves the `i64` range.
    pub fn reduce(&self, expression: &Expression, to: Currency) -> MoneyResult<Money> {
        trace!(
            %to,
            leaves = expression.leaf_count(),
            depth = expression.depth(),
            "reducing expression"
        );
        expression.reduce(self, to)
    }

    /// Reduces independent expressions in parallel, keeping input order.
    ///
    /// # Errors
    ///
    /// Returns the error of the earliest failing expression in input order.
    pub fn reduce_all(&self, expressions: &[Expression], to: Currency) -> MoneyResult<Vec<Money>> {
        let results: Vec<MoneyResult<Money>> = expressions
            .par_iter()
            .map(|expression| self.reduce(expression, to))
            .collect();
        results.into_iter().collect()
    }
}
