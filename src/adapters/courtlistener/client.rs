//! CourtListener Client - Implementation of DocketSource over the REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = CourtListenerConfig::new(api_key)
//!     .with_base_url("https://www.courtlistener.com/api/rest/v3/dockets")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let client = CourtListenerClient::new(config)?;
//! ```
//!
//! Each lookup is `GET <base-url>/<docket-id>/` authenticated with
//! `Authorization: Token <key>`.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::domain::foundation::DocketId;
use crate::ports::{DocketError, DocketMetadata, DocketSource};

/// Default dockets endpoint of the CourtListener REST API.
pub const DEFAULT_BASE_URL: &str = "https://www.courtlistener.com/api/rest/v3/dockets";

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "EOTrack/1.0";

/// Configuration for the CourtListener client.
#[derive(Debug, Clone)]
pub struct CourtListenerConfig {
    /// API token for authentication.
    api_key: Secret<String>,
    /// Dockets endpoint, without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl CourtListenerConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// CourtListener docket lookups over HTTP.
pub struct CourtListenerClient {
    config: CourtListenerConfig,
    client: Client,
}

impl CourtListenerClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns `DocketError::Network` if the HTTP client cannot be built
    pub fn new(config: CourtListenerConfig) -> Result<Self, DocketError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| DocketError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the URL of a single docket.
    fn docket_url(&self, docket_id: &DocketId) -> String {
        format!("{}/{}/", self.config.base_url, docket_id)
    }

    async fn send_request(&self, docket_id: &DocketId) -> Result<Response, DocketError> {
        self.client
            .get(self.docket_url(docket_id))
            .header(AUTHORIZATION, format!("Token {}", self.config.api_key()))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DocketError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    DocketError::network(format!("Connection failed: {}", e))
                } else {
                    DocketError::network(e.to_string())
                }
            })
    }
}

#[async_trait]
impl DocketSource for CourtListenerClient {
    async fn fetch_docket(&self, docket_id: &DocketId) -> Result<DocketMetadata, DocketError> {
        tracing::debug!(docket_id = %docket_id, "Fetching docket");
        let response = self.send_request(docket_id).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocketError::HttpStatus {
                docket_id: docket_id.clone(),
                status: status.as_u16(),
            });
        }

        response
            .json::<DocketMetadata>()
            .await
            .map_err(|e| DocketError::parse(e.to_string()))
    }
}
