//! Money expressions: a tree of `Money` leaves joined by `Sum` nodes.
//!
//! Trees can be arbitrarily deep, so every walk over them (reduction,
//! scaling, cloning, comparison, formatting, dropping) uses an explicit
//! heap stack instead of recursion.

use std::convert::Infallible;

use bourse_shared::Currency;

use super::bank::Bank;
use super::error::MoneyResult;
use super::sum::{self, Sum};
use super::value::Money;

/// Anything that reduces to a single `Money` given a bank and a target currency.
///
/// Trees are immutable; `plus` and `times` build new trees and leave their
/// operands untouched.
pub enum Expression {
    /// A concrete amount.
    Money(Money),
    /// Deferred addition of two sub-expressions.
    Sum(Box<Sum>),
}

/// Work item for the post-order walk in [`Expression::try_fold`].
enum Visit<'a> {
    Enter(&'a Expression),
    Combine,
}

impl Expression {
    /// Reduces the expression to one amount in `to`.
    ///
    /// Leaves are converted left to right; the first failure aborts the walk.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::MissingRate` if any leaf has no rate into `to`,
    /// or `MoneyError::Overflow` if the total leaves the `i64` range.
    pub fn reduce(&self, bank: &Bank, to: Currency) -> MoneyResult<Money> {
        self.try_fold(
            |money| money.reduce(bank, to),
            |augend, addend| sum::add_reduced(augend, addend, to),
        )
    }

    /// Scales every leaf of the expression.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if any scaled leaf leaves the `i64` range.
    pub fn times(&self, multiplier: i64) -> MoneyResult<Self> {
        self.try_fold(
            |money| money.times(multiplier),
            |augend, addend| Ok(Sum::new(augend, addend).into()),
        )
    }

    /// Adding two expressions always yields a `Sum`.
    #[must_use]
    pub fn plus(self, addend: impl Into<Self>) -> Self {
        Sum::new(self, addend).into()
    }

    /// Number of `Money` leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        let Ok(count) = self.try_fold::<_, Infallible>(|_| Ok(1), |a, b| Ok(a + b));
        count
    }

    /// Height of the tree; a bare `Money` has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let Ok(depth) = self.try_fold::<_, Infallible>(|_| Ok(1), |a, b| Ok(1 + a.max(b)));
        depth
    }

    /// Post-order fold: `leaf` on every `Money`, `combine(augend, addend)` on
    /// every `Sum` once both children are folded.
    pub(crate) fn try_fold<T, E>(
        &self,
        mut leaf: impl FnMut(&Money) -> Result<T, E>,
        mut combine: impl FnMut(T, T) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut pending = vec![Visit::Enter(self)];
        let mut folded: Vec<T> = Vec::new();

        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Enter(Self::Money(money)) => folded.push(leaf(money)?),
                Visit::Enter(Self::Sum(sum)) => {
                    pending.push(Visit::Combine);
                    pending.push(Visit::Enter(sum.addend()));
                    pending.push(Visit::Enter(sum.augend()));
                }
                Visit::Combine => {
                    let (Some(addend), Some(augend)) = (folded.pop(), folded.pop()) else {
                        unreachable!("every Combine follows two folded children");
                    };
                    folded.push(combine(augend, addend)?);
                }
            }
        }

        match folded.pop() {
            Some(result) if folded.is_empty() => Ok(result),
            _ => unreachable!("a finished fold leaves exactly one value"),
        }
    }
}

impl Clone for Expression {
    fn clone(&self) -> Self {
        let Ok(copy) = self.try_fold::<_, Infallible>(
            |money| Ok(Self::Money(*money)),
            |augend, addend| Ok(Sum::new(augend, addend).into()),
        );
        copy
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Money(a), Self::Money(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Self::Sum(a), Self::Sum(b)) => {
                    pending.push((a.addend(), b.addend()));
                    pending.push((a.augend(), b.augend()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expression {}

impl From<Money> for Expression {
    fn from(money: Money) -> Self {
        Self::Money(money)
    }
}

impl From<Sum> for Expression {
    fn from(sum: Sum) -> Self {
        Self::Sum(Box::new(sum))
    }
}

impl<T: Into<Expression>> std::ops::Add<T> for Expression {
    type Output = Self;

    fn add(self, addend: T) -> Self {
        self.plus(addend)
    }
}

impl<T: Into<Expression>> std::ops::Add<T> for Money {
    type Output = Expression;

    fn add(self, addend: T) -> Expression {
        self.plus(addend)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Token<'a> {
            Expr(&'a Expression),
            Text(&'static str),
        }

        let mut pending = vec![Token::Expr(self)];
        while let Some(token) = pending.pop() {
            match token {
                Token::Text(text) => f.write_str(text)?,
                Token::Expr(Self::Money(money)) => write!(f, "{money}")?,
                Token::Expr(Self::Sum(sum)) => {
                    f.write_str("(")?;
                    pending.push(Token::Text(")"));
                    pending.push(Token::Expr(sum.addend()));
                    pending.push(Token::Text(" + "));
                    pending.push(Token::Expr(sum.augend()));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Money(money) => f.debug_tuple("Money").field(money).finish(),
            Self::Sum(_) => f.debug_tuple("Sum").field(&format_args!("{self}")).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_always_builds_a_sum() {
        let expr = Money::dollar(5).plus(Money::franc(10));
        assert!(matches!(expr, Expression::Sum(_)));
        assert_eq!(expr.leaf_count(), 2);
        assert_eq!(expr.depth(), 2);
    }

    #[test]
    fn test_plus_nests_left() {
        let expr = Money::dollar(1).plus(Money::dollar(2)).plus(Money::dollar(3));
        assert_eq!(expr.to_string(), "((1 USD + 2 USD) + 3 USD)");
        assert_eq!(expr.leaf_count(), 3);
        assert_eq!(expr.depth(), 3);
    }

    #[test]
    fn test_add_operator_matches_plus() {
        let by_method = Money::dollar(5).plus(Money::franc(10));
        let by_operator = Money::dollar(5) + Money::franc(10);
        assert_eq!(by_method, by_operator);

        let chained = by_operator + Money::dollar(1);
        assert_eq!(chained.leaf_count(), 3);
    }

    #[test]
    fn test_plus_does_not_touch_operands() {
        let five = Expression::from(Money::dollar(5));
        let sum = five.clone().plus(Money::franc(10));
        assert_eq!(five, Expression::from(Money::dollar(5)));
        assert_ne!(sum, five);
    }

    #[test]
    fn test_times_on_leaf() {
        let expr = Expression::from(Money::franc(4)).times(3).unwrap();
        assert_eq!(expr, Expression::from(Money::franc(12)));
    }

    #[test]
    fn test_equality_is_structural() {
        let left = Money::dollar(1).plus(Money::dollar(2)).plus(Money::dollar(3));
        let right = Money::dollar(1).plus(Money::dollar(2).plus(Money::dollar(3)));
        assert_eq!(left, left.clone());
        assert_ne!(left, right);
    }

    #[test]
    fn test_debug_uses_infix_form() {
        let expr = Money::dollar(1).plus(Money::franc(2));
        assert_eq!(format!("{expr:?}"), "Sum((1 USD + 2 CHF))");
        assert_eq!(
            format!("{:?}", Expression::from(Money::dollar(1))),
            "Money(Money { amount: 1, currency: Usd })"
        );
    }

    #[test]
    fn test_fold_visits_leaves_left_to_right() {
        let expr = Money::dollar(1)
            .plus(Money::dollar(2).plus(Money::dollar(3)))
            .plus(Money::dollar(4));
        let mut seen = Vec::new();
        let Ok(()) = expr.try_fold::<_, Infallible>(
            |money| {
                seen.push(money.amount());
                Ok(())
            },
            |(), ()| Ok(()),
        );
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }
}
