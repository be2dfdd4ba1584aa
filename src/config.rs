// Runtime configuration for the Alimento API
// Values come from the process environment (optionally seeded from a .env file)

use std::str::FromStr;
use std::time::Duration;

use chrono::{FixedOffset, Local};

use thiserror::Error;

use crate::orders::PricePolicy;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Application configuration
///
/// Every monetary amount crossing the HTTP boundary is expressed in `currency`.
/// No currency code travels with individual amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// ISO 4217 code of the single currency used for all prices and totals
    pub currency: String,
    pub price_policy: PricePolicy,
    /// Upper bound on waiting for the ledger write lock
    pub ledger_write_timeout: Duration,
    /// Load the sample order history on startup
    pub seed_history: bool,
    /// First sequence number handed out by the order number generator
    pub order_number_start: u64,
    /// UTC offset used for clock times shown on the dashboard
    pub display_offset: FixedOffset,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            currency: "PHP".to_string(),
            price_policy: PricePolicy::Catalog,
            ledger_write_timeout: Duration::from_millis(500),
            seed_history: true,
            order_number_start: 1000,
            display_offset: *Local::now().offset(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Split out from `from_env` so tests do not have to touch process state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_or("PORT", lookup("PORT"), defaults.port)?;

        let currency = match lookup("CURRENCY") {
            Some(code) => {
                let code = code.trim().to_uppercase();
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(ConfigError::InvalidValue {
                        key: "CURRENCY",
                        value: code,
                    });
                }
                code
            }
            None => defaults.currency,
        };

        let price_policy = parse_or("PRICE_POLICY", lookup("PRICE_POLICY"), defaults.price_policy)?;

        let timeout_ms = parse_or(
            "LEDGER_WRITE_TIMEOUT_MS",
            lookup("LEDGER_WRITE_TIMEOUT_MS"),
            defaults.ledger_write_timeout.as_millis() as u64,
        )?;

        let seed_history = parse_or("SEED_HISTORY", lookup("SEED_HISTORY"), defaults.seed_history)?;
        let order_number_start = parse_or(
            "ORDER_NUMBER_START",
            lookup("ORDER_NUMBER_START"),
            defaults.order_number_start,
        )?;
        let display_offset = parse_or(
            "DISPLAY_UTC_OFFSET",
            lookup("DISPLAY_UTC_OFFSET"),
            defaults.display_offset,
        )?;

        Ok(Self {
            host,
            port,
            currency,
            price_policy,
            ledger_write_timeout: Duration::from_millis(timeout_ms),
            seed_history,
            order_number_start,
            display_offset,
        })
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
