//! Shared types, errors, and configuration for Bourse.
//!
//! This crate provides common types used across all other crates:
//! - The closed set of supported currencies
//! - Application-wide error types
//! - Configuration management (exchange rates, log filter)

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::Currency;
