//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_API_URL` - Base URL of the stock/product API (default: `http://localhost:3333`)
//! - `CART_STORAGE_DIR` - Directory holding persisted carts (default: `.cart`)
//! - `CART_STORAGE_KEY` - Key the cart is stored under (default: `@RocketShoes:cart`)
//! - `CART_MAILBOX_SIZE` - Pending requests the cart actor queues (default: 32)
//! - `CART_HTTP_TIMEOUT_SECS` - Per-request timeout for the API (default: 10)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_DIR: &str = ".cart";
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";
pub const DEFAULT_MAILBOX_SIZE: usize = 32;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Settings the cart actor itself needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSettings {
    pub storage_key: String,
    pub mailbox_size: usize,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            mailbox_size: DEFAULT_MAILBOX_SIZE,
        }
    }
}

/// Full application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    pub api_url: String,
    pub storage_dir: PathBuf,
    pub http_timeout: Duration,
    pub cart: CartSettings,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mailbox_size: usize = parse_positive(&lookup, "CART_MAILBOX_SIZE", DEFAULT_MAILBOX_SIZE)?;
        let timeout_secs: u64 =
            parse_positive(&lookup, "CART_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;

        let api_url = get_or("CART_API_URL", DEFAULT_API_URL);
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvVar(
                "CART_API_URL".to_string(),
                format!("expected an http(s) URL, got {api_url:?}"),
            ));
        }

        let storage_key = get_or("CART_STORAGE_KEY", DEFAULT_STORAGE_KEY);
        if storage_key.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CART_STORAGE_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            api_url,
            storage_dir: PathBuf::from(get_or("CART_STORAGE_DIR", DEFAULT_STORAGE_DIR)),
            http_timeout: Duration::from_secs(timeout_secs),
            cart: CartSettings {
                storage_key,
                mailbox_size,
            },
        })
    }
}

/// Parses a number that must be greater than zero.
fn parse_positive<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if value <= T::default() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(value)
}
