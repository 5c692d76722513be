//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
    /// Exchange-rate configuration.
    #[serde(default)]
    pub bank: BankConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "bourse=info".to_string()
}

/// Exchange rates to register on startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankConfig {
    /// Directional rates, applied in order (later entries overwrite earlier ones).
    #[serde(default)]
    pub rates: Vec<RateConfig>,
}

/// A single directional exchange rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateConfig {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Divide a `from` amount by this to get the `to` amount.
    pub multiplier: i64,
}

impl AppConfig {
    /// Loads configuration from config files and environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `BOURSE__*` environment variables. Rate values are checked when
    /// the bank is built from them, not here.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a source cannot be read or the merged
    /// configuration does not deserialize.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BOURSE").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = from_toml("");
        assert_eq!(config.log.filter, "bourse=info");
        assert!(config.bank.rates.is_empty());
    }

    #[test]
    fn test_rates_deserialize() {
        let config = from_toml(
            r#"
            [[bank.rates]]
            from = "CHF"
            to = "USD"
            multiplier = 2
            "#,
        );
        assert_eq!(
            config.bank.rates,
            vec![RateConfig {
                from: Currency::Chf,
                to: Currency::Usd,
                multiplier: 2,
            }]
        );
    }

    #[test]
    fn test_unknown_currency_fails_to_deserialize() {
        let result = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [[bank.rates]]
                from = "XXX"
                to = "USD"
                multiplier = 2
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test-nonexistent")),
                ("BOURSE__LOG__FILTER", Some("bourse=debug")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.log.filter, "bourse=debug");
            },
        );
    }
}
