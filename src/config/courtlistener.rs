//! CourtListener configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::validate_url;
use crate::adapters::courtlistener::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

/// Environment variable holding the CourtListener API token.
pub const API_KEY_ENV: &str = "CL_API_KEY";

/// CourtListener docket API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CourtListenerConfig {
    /// API token; falls back to `CL_API_KEY`
    pub api_key: Option<Secret<String>>,

    /// Dockets endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Pause between docket requests in milliseconds (0 disables)
    #[serde(default = "default_request_delay")]
    pub request_delay_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl CourtListenerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Check if a non-empty API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Returns the API key, or an error naming `CL_API_KEY`
    pub fn require_api_key(&self) -> Result<Secret<String>, ValidationError> {
        match &self.api_key {
            Some(key) if self.has_api_key() => Ok(key.clone()),
            _ => Err(ValidationError::MissingRequired(API_KEY_ENV)),
        }
    }

    /// Validate CourtListener configuration
    ///
    /// The API key is not checked here; only `update` needs it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_url("courtlistener.base_url", &self.base_url)?;
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for CourtListenerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            request_delay_ms: default_request_delay(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_request_delay() -> u64 {
    1000
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courtlistener_defaults() {
        let config = CourtListenerConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.request_delay(), Duration::from_secs(1));
        assert_eq!(config.user_agent, "EOTrack/1.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_key_names_env_var() {
        let config = CourtListenerConfig::default();
        let err = config.require_api_key().unwrap_err();
        assert_eq!(err, ValidationError::MissingRequired("CL_API_KEY"));
        assert!(err.to_string().contains("CL_API_KEY"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = CourtListenerConfig {
            api_key: Some(Secret::new("  ".to_string())),
            ..Default::default()
        };
        assert!(!config.has_api_key());
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn test_present_key_is_returned() {
        let config = CourtListenerConfig {
            api_key: Some(Secret::new("abc123".to_string())),
            ..Default::default()
        };
        assert_eq!(config.require_api_key().unwrap().expose_secret(), "abc123");
    }

    #[test]
    fn test_zero_timeout_invalid() {
        let config = CourtListenerConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_non_http_base_url_invalid() {
        let config = CourtListenerConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidUrl(_))
        ));
    }
}
