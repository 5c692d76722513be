//! Delimiter-splitting summation of positive integers.
//!
//! Independent of the money expressions; shares no types with them.

pub mod error;
pub mod string_calculator;

pub use error::{CalculatorError, CalculatorResult};
pub use string_calculator::{DEFAULT_DELIMITERS, StringCalculator, add};
