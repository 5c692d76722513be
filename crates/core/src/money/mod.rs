//! Money arithmetic expressions and currency reduction.
//!
//! This module implements:
//! - `Money` leaves (integer amount + currency)
//! - `Sum` nodes for deferred addition
//! - The `Expression` tree tying the two together
//! - `Pair` keys and the `Bank` rate registry that reduces expressions
//! - Error types for rate lookup and arithmetic overflow

pub mod bank;
pub mod error;
pub mod expression;
pub mod pair;
pub mod sum;
pub mod value;

#[cfg(test)]
mod props;

pub use bank::Bank;
pub use error::{MoneyError, MoneyResult};
pub use expression::Expression;
pub use pair::Pair;
pub use sum::Sum;
pub use value::Money;
