//! Deferred addition of two expressions.

use bourse_shared::Currency;

use super::bank::Bank;
use super::error::{MoneyError, MoneyResult};
use super::expression::Expression;
use super::value::Money;

/// `augend + addend`, evaluated only when reduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sum {
    augend: Expression,
    addend: Expression,
}

impl Sum {
    /// Creates a new sum, taking ownership of both sides.
    #[must_use]
    pub fn new(augend: impl Into<Expression>, addend: impl Into<Expression>) -> Self {
        Self {
            augend: augend.into(),
            addend: addend.into(),
        }
    }

    /// The left operand.
    #[must_use]
    pub const fn augend(&self) -> &Expression {
        &self.augend
    }

    /// The right operand.
    #[must_use]
    pub const fn addend(&self) -> &Expression {
        &self.addend
    }

    /// Reduces both sides to `to`, then adds the amounts.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::MissingRate` if either side has a leaf with no
    /// rate into `to`, or `MoneyError::Overflow` if the total leaves the
    /// `i64` range.
    pub fn reduce(&self, bank: &Bank, to: Currency) -> MoneyResult<Money> {
        let augend = self.augend.reduce(bank, to)?;
        let addend = self.addend.reduce(bank, to)?;
        add_reduced(augend, addend, to)
    }

    /// Distributes the multiplier over both sides, down to every leaf.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if any scaled leaf leaves the `i64` range.
    pub fn times(&self, multiplier: i64) -> MoneyResult<Expression> {
        let augend = self.augend.times(multiplier)?;
        let addend = self.addend.times(multiplier)?;
        Ok(Self::new(augend, addend).into())
    }

    /// Wraps this sum and `addend` in a new sum. See [`Expression::plus`].
    #[must_use]
    pub fn plus(self, addend: impl Into<Expression>) -> Expression {
        Expression::from(self).plus(addend)
    }
}

impl Drop for Sum {
    fn drop(&mut self) {
        // Unlink nested sums onto a heap stack so a deep tree is freed
        // iteratively; each popped node is dropped with leaf-only children.
        let mut pending = vec![detach(&mut self.augend), detach(&mut self.addend)];
        while let Some(expression) = pending.pop() {
            if let Expression::Sum(mut sum) = expression {
                pending.push(detach(&mut sum.augend));
                pending.push(detach(&mut sum.addend));
            }
        }
    }
}

/// Swaps a child out for a leaf placeholder.
fn detach(child: &mut Expression) -> Expression {
    std::mem::replace(child, Money::zero(Currency::Usd).into())
}

/// Adds two amounts already reduced to `to`.
pub(super) fn add_reduced(augend: Money, addend: Money, to: Currency) -> MoneyResult<Money> {
    debug_assert_eq!(augend.currency(), to);
    debug_assert_eq!(addend.currency(), to);

    let amount = augend
        .amount()
        .checked_add(addend.amount())
        .ok_or(MoneyError::Overflow)?;
    Ok(Money::new(amount, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_addition() {
        let sum = Sum::new(Money::dollar(4), Money::dollar(3));
        assert_eq!(sum.reduce(&Bank::new(), Currency::Usd).unwrap(), Money::dollar(7));
    }

    #[test]
    fn test_times_distributes_to_nested_leaves() {
        let inner = Sum::new(Money::dollar(1), Money::franc(2));
        let outer = Sum::new(inner, Money::dollar(3));

        let scaled = outer.times(10).unwrap();
        assert_eq!(scaled.to_string(), "((10 USD + 20 CHF) + 30 USD)");
    }

    #[test]
    fn test_sum_plus_money() {
        let expr = Sum::new(Money::dollar(5), Money::franc(10)).plus(Money::dollar(5));
        assert_eq!(expr.leaf_count(), 3);
    }

    #[test]
    fn test_reduce_reports_overflow() {
        let sum = Sum::new(Money::dollar(i64::MAX), Money::dollar(1));
        assert_eq!(
            sum.reduce(&Bank::new(), Currency::Usd).unwrap_err(),
            MoneyError::Overflow
        );
    }

    #[test]
    fn test_reduce_propagates_missing_rate_from_either_side() {
        let bank = Bank::new();
        let sum = Sum::new(Money::dollar(1), Money::franc(2));
        assert_eq!(
            sum.reduce(&bank, Currency::Usd).unwrap_err(),
            MoneyError::MissingRate {
                from: Currency::Chf,
                to: Currency::Usd,
            }
        );
    }
}
