//! Document Feed Port - Interface for discovering newly published documents.

use async_trait::async_trait;

use crate::domain::document::Document;

/// Errors from fetching the document feed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("feed returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Port for fetching published presidential documents
#[async_trait]
pub trait DocumentFeed: Send + Sync {
    /// Fetch documents as fresh, uncurated records
    ///
    /// Returned documents are `enacted` and carry no challenges.
    async fn fetch_documents(&self) -> Result<Vec<Document>, FeedError>;
}
