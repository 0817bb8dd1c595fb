//! ImportDocumentsHandler - Pulls newly published documents into the collection.
//!
//! Fetches executive orders and proclamations from the document feed and
//! merges them with the curated collection. Curated status and challenges
//! survive the merge. A missing data file starts an empty collection; the
//! merged collection is always written.

use std::sync::Arc;

use crate::domain::document::{merge_documents, DocumentCollection};
use crate::domain::foundation::ValidationError;
use crate::ports::{DocumentFeed, DocumentStore, FeedError, StorageError};

/// Result of an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Documents returned by the feed.
    pub fetched: usize,
    /// Of those, documents not previously in the collection.
    pub added: usize,
    /// Existing documents the feed did not return.
    pub retained: usize,
    /// Size of the saved collection.
    pub total: usize,
}

/// Error type for importing documents.
#[derive(Debug, thiserror::Error)]
pub enum ImportDocumentsError {
    #[error("document feed failed: {0}")]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("merged collection is invalid: {0}")]
    Invalid(#[from] ValidationError),
}

/// Handler for document import.
pub struct ImportDocumentsHandler {
    store: Arc<dyn DocumentStore>,
    feed: Arc<dyn DocumentFeed>,
}

impl ImportDocumentsHandler {
    pub fn new(store: Arc<dyn DocumentStore>, feed: Arc<dyn DocumentFeed>) -> Self {
        Self { store, feed }
    }

    pub async fn handle(&self) -> Result<ImportReport, ImportDocumentsError> {
        // 1. Fetch before touching storage so a feed failure changes nothing
        let fetched = self.feed.fetch_documents().await?;
        let fetched_count = fetched.len();

        // 2. Load the curated collection
        let existing = match self.store.load().await {
            Ok(collection) => collection,
            Err(StorageError::NotFound(path)) => {
                tracing::info!(path = %path.display(), "No data file yet, starting empty");
                DocumentCollection::default()
            }
            Err(err) => return Err(err.into()),
        };

        // 3. Merge and persist
        let outcome = merge_documents(fetched, existing)?;
        self.store.save(&outcome.collection).await?;

        let report = ImportReport {
            fetched: fetched_count,
            added: outcome.added,
            retained: outcome.retained,
            total: outcome.collection.len(),
        };
        tracing::info!(
            fetched = report.fetched,
            added = report.added,
            total = report.total,
            "Import finished"
        );

        Ok(report)
    }
}
