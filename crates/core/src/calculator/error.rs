//! Calculator error types.

use thiserror::Error;

/// Result type alias using `CalculatorError`.
pub type CalculatorResult<T> = Result<T, CalculatorError>;

/// Errors returned while parsing and summing an input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// A token is not an integer.
    #[error("Invalid input: {0:?} is not an integer")]
    InvalidInput(String),

    /// Only positive integers may be summed.
    #[error("Input must be positive, got {0}")]
    NotPositive(i64),

    /// The `//<delimiter>\n` header is incomplete.
    #[error("Malformed delimiter header; expected `//<char>\\n`")]
    MalformedHeader,

    /// The running total left the `i64` range.
    #[error("Sum overflowed")]
    Overflow,
}

impl CalculatorError {
    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotPositive(_) => "NOT_POSITIVE",
            Self::MalformedHeader => "MALFORMED_HEADER",
            Self::Overflow => "OVERFLOW",
        }
    }
}
