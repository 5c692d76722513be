//! Core arithmetic for Bourse.
//!
//! This crate contains pure computation with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `money` - Money expressions and exchange-rate reduction
//! - `calculator` - Delimited string summation

pub mod calculator;
pub mod money;
