//! Money error types for rate lookup and arithmetic failures.

use bourse_shared::Currency;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur while building or reducing money expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Rate Errors ==========
    /// No rate registered for the ordered currency pair.
    #[error("No exchange rate registered for {from} to {to}")]
    MissingRate {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// Rate multiplier must be positive.
    #[error("Exchange rate for {from} to {to} must be positive, got {multiplier}")]
    InvalidRate {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
        /// The rejected multiplier.
        multiplier: i64,
    },

    /// The identity rate is fixed at 1 and cannot be registered.
    #[error("Cannot register a rate from {0} to itself")]
    IdentityRate(Currency),

    // ========== Arithmetic Errors ==========
    /// An amount left the `i64` range while scaling or summing.
    #[error("Money amount overflowed")]
    Overflow,
}

impl MoneyError {
    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRate { .. } => "MISSING_RATE",
            Self::InvalidRate { .. } => "INVALID_RATE",
            Self::IdentityRate(_) => "IDENTITY_RATE",
            Self::Overflow => "OVERFLOW",
        }
    }

    /// Returns true if fixing the bank's rate table resolves this error.
    ///
    /// None of these errors are transient; retrying without a change never helps.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingRate { .. } | Self::InvalidRate { .. } | Self::IdentityRate(_)
        )
    }
}
