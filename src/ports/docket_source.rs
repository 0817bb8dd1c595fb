//! Docket Source Port - Interface for reading docket metadata.
//!
//! Implemented by the CourtListener HTTP adapter and by an in-memory mock
//! for tests.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::foundation::DocketId;

/// The part of a docket record the updater reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocketMetadata {
    /// Raw modification timestamp as sent by the remote service.
    #[serde(default)]
    pub date_modified: Option<String>,
}

impl DocketMetadata {
    pub fn modified_at(raw: impl Into<String>) -> Self {
        Self {
            date_modified: Some(raw.into()),
        }
    }
}

/// Errors from a single docket lookup.
///
/// All variants are per-item failures: the caller logs them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocketError {
    /// Non-success HTTP status.
    #[error("docket {docket_id} returned HTTP {status}")]
    HttpStatus { docket_id: DocketId, status: u16 },

    /// Request did not complete in time.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Connection or transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON object.
    #[error("parse error: {0}")]
    Parse(String),
}

impl DocketError {
    pub fn network(message: impl Into<String>) -> Self {
        DocketError::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        DocketError::Parse(message.into())
    }
}

/// Port for fetching docket metadata by id
#[async_trait]
pub trait DocketSource: Send + Sync {
    /// Fetch the docket record for `docket_id`
    ///
    /// # Errors
    /// Returns `DocketError` if the request fails or the body cannot be read
    async fn fetch_docket(&self, docket_id: &DocketId) -> Result<DocketMetadata, DocketError>;
}
