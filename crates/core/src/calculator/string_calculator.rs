//! String calculator.
//!
//! Input format:
//! - Empty string sums to 0
//! - Numbers separated by `,` or newline
//! - An optional `//<c>` header adds `<c>` as an extra delimiter; the numbers
//!   start after the first newline, so `//\n\n1` adds newline (already a
//!   default) and `//;;\n1` adds `;` and ignores the second `;`
//! - Every number must be a positive integer

use super::error::{CalculatorError, CalculatorResult};

/// Delimiters recognized when no others are configured.
pub const DEFAULT_DELIMITERS: [char; 2] = [',', '\n'];

const HEADER_PREFIX: &str = "//";

/// Sums delimited positive integers.
///
/// Stateless across calls: a custom delimiter from one input's header does
/// not leak into the next input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringCalculator {
    delimiters: Vec<char>,
}

impl Default for StringCalculator {
    fn default() -> Self {
        Self::with_delimiters(DEFAULT_DELIMITERS)
    }
}

impl StringCalculator {
    /// Creates a calculator using [`DEFAULT_DELIMITERS`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with its own base delimiter set.
    #[must_use]
    pub fn with_delimiters(delimiters: impl IntoIterator<Item = char>) -> Self {
        Self {
            delimiters: delimiters.into_iter().collect(),
        }
    }

    /// Parses `input` and returns the sum of its numbers.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::MalformedHeader` if a `//` header has no
    /// delimiter character or no newline, `InvalidInput` for a token that is
    /// not an integer, `NotPositive` for a token `<= 0`, and `Overflow` if
    /// the sum leaves the `i64` range.
    pub fn add(&self, input: &str) -> CalculatorResult<i64> {
        if input.is_empty() {
            return Ok(0);
        }

        let (custom, body) = split_header(input)?;
        body.split(|c: char| self.delimiters.contains(&c) || Some(c) == custom)
            .filter(|token| !token.is_empty())
            .try_fold(0i64, |total, token| {
                let value = parse_token(token)?;
                total.checked_add(value).ok_or(CalculatorError::Overflow)
            })
    }
}

/// Sums `input` with the default delimiters.
///
/// # Errors
///
/// See [`StringCalculator::add`].
pub fn add(input: &str) -> CalculatorResult<i64> {
    StringCalculator::new().add(input)
}

/// Splits off a `//<c>...\n` header, returning `<c>` and everything after
/// the first newline.
fn split_header(input: &str) -> CalculatorResult<(Option<char>, &str)> {
    let Some(rest) = input.strip_prefix(HEADER_PREFIX) else {
        return Ok((None, input));
    };
    let delimiter = rest.chars().next().ok_or(CalculatorError::MalformedHeader)?;
    let (_, body) = input
        .split_once('\n')
        .ok_or(CalculatorError::MalformedHeader)?;
    Ok((Some(delimiter), body))
}

fn parse_token(token: &str) -> CalculatorResult<i64> {
    let value: i64 = token
        .parse()
        .map_err(|_| CalculatorError::InvalidInput(token.to_string()))?;
    if value <= 0 {
        return Err(CalculatorError::NotPositive(value));
    }
    Ok(value)
}
