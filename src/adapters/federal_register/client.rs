//! Federal Register Client - Implementation of DocumentFeed.
//!
//! Queries the public documents endpoint for presidential documents
//! (executive orders and proclamations) signed by one president since a
//! given publication date. No credential is needed.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::document::Document;
use crate::domain::foundation::{CalendarDate, DocumentId, DocumentType};
use crate::ports::{DocumentFeed, FeedError};

/// Default Federal Register API root.
pub const DEFAULT_BASE_URL: &str = "https://www.federalregister.gov/api/v1";

/// Fields requested from the documents endpoint.
const REQUESTED_FIELDS: [&str; 5] = [
    "presidential_document_number",
    "title",
    "publication_date",
    "html_url",
    "presidential_document_type",
];

/// Configuration for the Federal Register client.
#[derive(Debug, Clone)]
pub struct FederalRegisterConfig {
    /// API root, without trailing slash.
    pub base_url: String,
    /// Results per page (the API caps this at 1000).
    pub per_page: u32,
    /// President slug, e.g. `donald-trump`.
    pub president: String,
    /// Earliest publication date to include.
    pub published_since: CalendarDate,
    pub timeout: Duration,
}

impl FederalRegisterConfig {
    pub fn new(president: impl Into<String>, published_since: CalendarDate) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            per_page: 1000,
            president: president.into(),
            published_since,
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct DocumentsPage {
    #[serde(default)]
    results: Vec<FederalRegisterDocument>,
}

#[derive(Debug, Deserialize)]
struct FederalRegisterDocument {
    presidential_document_number: Option<String>,
    title: String,
    publication_date: CalendarDate,
    html_url: String,
    presidential_document_type: Option<String>,
}

impl FederalRegisterDocument {
    /// Converts to a fresh Document, or `None` if it cannot be tracked.
    fn into_document(self) -> Option<Document> {
        let number = self.presidential_document_number?;
        let id = match DocumentId::new(number) {
            Ok(id) => id,
            Err(_) => {
                tracing::debug!(title = %self.title, "Skipping document without a number");
                return None;
            }
        };

        let document_type = match self.presidential_document_type.as_deref() {
            None => DocumentType::default(),
            Some(raw) => match raw.parse::<DocumentType>() {
                Ok(kind) => kind,
                Err(_) => {
                    tracing::debug!(document_id = %id, kind = raw, "Skipping unsupported document type");
                    return None;
                }
            },
        };

        Some(
            Document::new(id, self.title, self.publication_date, self.html_url)
                .with_type(document_type),
        )
    }
}

/// Federal Register documents feed over HTTP.
pub struct FederalRegisterClient {
    config: FederalRegisterConfig,
    client: Client,
}

impl FederalRegisterClient {
    /// # Errors
    /// Returns `FeedError::Network` if the HTTP client cannot be built
    pub fn new(config: FederalRegisterConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FeedError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn documents_url(&self) -> String {
        format!("{}/documents.json", self.config.base_url)
    }

    /// Query string pairs; repeated keys are array conditions.
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("per_page", self.config.per_page.to_string()),
            ("order", "newest".to_string()),
            ("conditions[president][]", self.config.president.clone()),
            ("conditions[type][]", "PRESDOCU".to_string()),
        ];
        for kind in DocumentType::ALL {
            params.push((
                "conditions[presidential_document_type][]",
                kind.as_str().to_string(),
            ));
        }
        params.push((
            "conditions[publication_date][gte]",
            self.config.published_since.to_string(),
        ));
        for field in REQUESTED_FIELDS {
            params.push(("fields[]", field.to_string()));
        }
        params
    }

    async fn send_request(&self) -> Result<Response, FeedError> {
        self.client
            .get(self.documents_url())
            .query(&self.query_params())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FeedError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else {
                    FeedError::Network(e.to_string())
                }
            })
    }
}

#[async_trait]
impl DocumentFeed for FederalRegisterClient {
    async fn fetch_documents(&self) -> Result<Vec<Document>, FeedError> {
        let response = self.send_request().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let page: DocumentsPage = response
            .json()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        let fetched = page.results.len();
        let documents: Vec<Document> = page
            .results
            .into_iter()
            .filter_map(FederalRegisterDocument::into_document)
            .collect();

        tracing::info!(
            fetched,
            usable = documents.len(),
            "Fetched presidential documents"
        );
        Ok(documents)
    }
}
