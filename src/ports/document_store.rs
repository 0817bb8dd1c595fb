//! Document Store Port - Interface for persisting the document collection.
//!
//! The collection is loaded and saved as a whole; there is no partial update.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::document::DocumentCollection;
use crate::domain::foundation::ValidationError;

/// Errors that can occur during storage operations
///
/// Any of these aborts the current job.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to serialize documents: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize documents: {0}")]
    DeserializationFailed(String),

    #[error("Invalid document collection: {0}")]
    Invalid(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for loading and saving the document collection
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the full collection
    ///
    /// # Errors
    /// Returns `StorageError::NotFound` if nothing has been stored yet
    async fn load(&self) -> Result<DocumentCollection, StorageError>;

    /// Replace the stored collection
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails
    async fn save(&self, collection: &DocumentCollection) -> Result<(), StorageError>;
}
