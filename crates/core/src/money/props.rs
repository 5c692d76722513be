//! Property-based tests for money expressions.
//!
//! - Identity reduction of scaled money
//! - Cross-currency addition with truncating division
//! - Associativity of addition under reduction
//! - Distribution of `times` over `plus`

use proptest::prelude::*;

use bourse_shared::Currency;

use super::{Bank, Expression, Money, MoneyError};

/// Amounts small enough that products and sums in these tests stay in range.
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

fn multiplier() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

fn rate() -> impl Strategy<Value = i64> {
    1i64..10_000i64
}

fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// A bank with a rate from every currency into every other one.
fn full_bank(rate: i64) -> Bank {
    let bank = Bank::new();
    for from in Currency::ALL {
        for to in Currency::ALL {
            if from != to {
                bank.add_rate(from, to, rate).unwrap();
            }
        }
    }
    bank
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Scaling then reducing to the same currency needs no rate.
    #[test]
    fn prop_times_then_identity_reduce(
        n in amount(),
        k in multiplier(),
        c in currency(),
    ) {
        let bank = Bank::new();
        let reduced = bank.reduce(&Money::new(n, c).times(k).unwrap(), c).unwrap();
        prop_assert_eq!(reduced, Money::new(n * k, c));
    }

    /// Cross-currency addition truncates the converted leaf.
    #[test]
    fn prop_mixed_addition(
        a in amount(),
        b in amount(),
        r in rate(),
    ) {
        let bank = Bank::new();
        bank.add_rate(Currency::Chf, Currency::Usd, r).unwrap();
        let expr = Money::franc(a).plus(Money::dollar(b));
        let reduced = bank.reduce(&expr, Currency::Usd).unwrap();
        prop_assert_eq!(reduced, Money::dollar(a / r + b));
    }

    /// `(a + b) + c` and `a + (b + c)` reduce to the same amount.
    #[test]
    fn prop_addition_is_associative(
        a in amount(),
        b in amount(),
        c in amount(),
        currencies in (currency(), currency(), currency()),
        target in currency(),
        r in rate(),
    ) {
        let bank = full_bank(r);
        let (ca, cb, cc) = currencies;
        let (a, b, c) = (Money::new(a, ca), Money::new(b, cb), Money::new(c, cc));

        let left = a.plus(b).plus(c);
        let right = a.plus(b.plus(c));
        prop_assert_eq!(
            bank.reduce(&left, target).unwrap(),
            bank.reduce(&right, target).unwrap()
        );
    }

    /// `(a + b) * k` reduces like `a * k + b * k`.
    #[test]
    fn prop_times_distributes_over_plus(
        a in amount(),
        b in amount(),
        k in multiplier(),
        currencies in (currency(), currency()),
        target in currency(),
        r in rate(),
    ) {
        let bank = full_bank(r);
        let (ca, cb) = currencies;
        let (a, b) = (Money::new(a, ca), Money::new(b, cb));

        let scaled_sum = a.plus(b).times(k).unwrap();
        let summed_scales = a.times(k).unwrap().plus(b.times(k).unwrap());
        prop_assert_eq!(
            bank.reduce(&scaled_sum, target).unwrap(),
            bank.reduce(&summed_scales, target).unwrap()
        );
    }

    /// The identity rate holds for every currency with nothing registered.
    #[test]
    fn prop_identity_rate(c in currency()) {
        prop_assert_eq!(Bank::new().rate(c, c).unwrap(), 1);
    }

    /// Unregistered pairs never fall back to a default rate.
    #[test]
    fn prop_unregistered_pair_fails(from in currency(), to in currency(), n in amount()) {
        prop_assume!(from != to);
        let expr: Expression = Money::new(n, from).into();
        prop_assert_eq!(
            Bank::new().reduce(&expr, to).unwrap_err(),
            MoneyError::MissingRate { from, to }
        );
    }
}
