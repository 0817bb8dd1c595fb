//! Mock Docket Source for testing.
//!
//! Answers docket lookups from a pre-configured table, with error injection
//! and call tracking, so the updater can be exercised without the network.
//!
//! # Example
//!
//! ```ignore
//! let source = MockDocketSource::new()
//!     .with_modified("69625036", "2025-03-01T12:00:00Z")
//!     .with_status("111", 500);
//!
//! let metadata = source.fetch_docket(&docket_id).await?;
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::foundation::DocketId;
use crate::ports::{DocketError, DocketMetadata, DocketSource};

/// A configured answer for one docket id.
#[derive(Debug, Clone)]
pub enum MockDocketResponse {
    /// Success with the given raw `date_modified`.
    Modified(String),
    /// Success without a `date_modified` field.
    NoTimestamp,
    /// Fail with a non-success HTTP status.
    Status(u16),
    /// Fail with a lookup error.
    Error(DocketError),
}

/// Mock docket source for testing.
///
/// Unconfigured dockets answer HTTP 404.
#[derive(Debug, Clone, Default)]
pub struct MockDocketSource {
    responses: Arc<Mutex<HashMap<String, MockDocketResponse>>>,
    calls: Arc<Mutex<Vec<DocketId>>>,
}

impl MockDocketSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `docket_id` with a successful response.
    pub fn with_modified(self, docket_id: &str, date_modified: &str) -> Self {
        self.respond(
            docket_id,
            MockDocketResponse::Modified(date_modified.to_string()),
        )
    }

    /// Answers `docket_id` with a success that lacks `date_modified`.
    pub fn with_no_timestamp(self, docket_id: &str) -> Self {
        self.respond(docket_id, MockDocketResponse::NoTimestamp)
    }

    /// Answers `docket_id` with a non-success HTTP status.
    pub fn with_status(self, docket_id: &str, status: u16) -> Self {
        self.respond(docket_id, MockDocketResponse::Status(status))
    }

    /// Answers `docket_id` with an arbitrary lookup error.
    pub fn with_error(self, docket_id: &str, error: DocketError) -> Self {
        self.respond(docket_id, MockDocketResponse::Error(error))
    }

    pub fn respond(self, docket_id: &str, response: MockDocketResponse) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(docket_id.to_string(), response);
        self
    }

    /// Dockets requested so far, in order.
    pub fn calls(&self) -> Vec<DocketId> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl DocketSource for MockDocketSource {
    async fn fetch_docket(&self, docket_id: &DocketId) -> Result<DocketMetadata, DocketError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(docket_id.clone());

        let response = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(docket_id.as_str())
            .cloned();

        match response {
            Some(MockDocketResponse::Modified(raw)) => Ok(DocketMetadata::modified_at(raw)),
            Some(MockDocketResponse::NoTimestamp) => Ok(DocketMetadata::default()),
            Some(MockDocketResponse::Status(status)) => Err(DocketError::HttpStatus {
                docket_id: docket_id.clone(),
                status,
            }),
            Some(MockDocketResponse::Error(error)) => Err(error),
            None => Err(DocketError::HttpStatus {
                docket_id: docket_id.clone(),
                status: 404,
            }),
        }
    }
}
