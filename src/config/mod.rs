//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EO_TRACKER` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment loads.
//!
//! # Example
//!
//! ```no_run
//! use eo_tracker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Data file: {}", config.storage.data_file.display());
//! ```

mod courtlistener;
mod error;
mod federal_register;
mod logging;
mod storage;

pub use courtlistener::{CourtListenerConfig, API_KEY_ENV};
pub use error::{ConfigError, ValidationError};
pub use federal_register::FederalRegisterConfig;
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use secrecy::Secret;
use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// CourtListener docket API
    #[serde(default)]
    pub courtlistener: CourtListenerConfig,

    /// Data file location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Federal Register documents API
    #[serde(default)]
    pub federal_register: FederalRegisterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EO_TRACKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `CL_API_KEY` for the CourtListener token
    ///
    /// # Environment Variable Format
    ///
    /// - `EO_TRACKER__STORAGE__DATA_FILE=./data.json` -> `storage.data_file`
    /// - `EO_TRACKER__COURTLISTENER__REQUEST_DELAY_MS=0` -> `courtlistener.request_delay_ms`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EO_TRACKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if !config.courtlistener.has_api_key() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                config.courtlistener.api_key = Some(Secret::new(key));
            }
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.courtlistener.validate()?;
        self.storage.validate()?;
        self.federal_register.validate()?;
        Ok(())
    }
}

fn validate_url(field: &'static str, url: &str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl(field))
    }
}
