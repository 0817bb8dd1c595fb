//! Federal Register configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::validate_url;
use crate::adapters::federal_register::DEFAULT_BASE_URL;
use crate::domain::foundation::CalendarDate;

/// Federal Register documents API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FederalRegisterConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Results per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// President slug used in the query conditions
    #[serde(default = "default_president")]
    pub president: String,

    /// Earliest publication date, `YYYY-MM-DD`
    #[serde(default = "default_published_since")]
    pub published_since: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl FederalRegisterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn published_since(&self) -> Result<CalendarDate, ValidationError> {
        CalendarDate::parse(&self.published_since).map_err(|_| ValidationError::InvalidDate {
            field: "federal_register.published_since",
            value: self.published_since.clone(),
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_url("federal_register.base_url", &self.base_url)?;
        if self.per_page == 0 || self.per_page > 1000 {
            return Err(ValidationError::InvalidPageSize);
        }
        if self.president.trim().is_empty() {
            return Err(ValidationError::MissingRequired("federal_register.president"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        self.published_since()?;
        Ok(())
    }
}

impl Default for FederalRegisterConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            per_page: default_per_page(),
            president: default_president(),
            published_since: default_published_since(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_per_page() -> u32 {
    1000
}

fn default_president() -> String {
    "donald-trump".to_string()
}

fn default_published_since() -> String {
    "2025-01-19".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_federal_register_defaults() {
        let config = FederalRegisterConfig::default();
        assert_eq!(config.per_page, 1000);
        assert_eq!(config.president, "donald-trump");
        assert_eq!(config.published_since().unwrap().to_string(), "2025-01-19");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_page_size_bounds() {
        let config = FederalRegisterConfig {
            per_page: 1001,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPageSize));
    }

    #[test]
    fn test_bad_published_since() {
        let config = FederalRegisterConfig {
            published_since: "Jan 19".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDate { .. })
        ));
    }
}
