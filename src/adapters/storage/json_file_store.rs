//! JSON File Document Store Adapter
//!
//! Reads and writes the collection as a single JSON array. The output is
//! kept close to what a person editing the file would write, so rewrites
//! produce small diffs:
//!
//! - two-space indentation, `\n` line endings, trailing newline
//! - non-ASCII characters written as-is, not `\u` escaped
//! - keys kept in the order they were read, unknown fields included

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::document::{Document, DocumentCollection};
use crate::ports::{DocumentStore, StorageError};

/// Renders a collection in the on-disk format.
pub fn encode_collection(collection: &DocumentCollection) -> Result<String, StorageError> {
    let mut json = serde_json::to_string_pretty(collection)
        .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

/// Parses the on-disk format, rejecting duplicate document ids.
pub fn decode_collection(text: &str) -> Result<DocumentCollection, StorageError> {
    let documents: Vec<Document> = serde_json::from_str(text.trim_start_matches('\u{feff}'))
        .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;
    Ok(DocumentCollection::new(documents)?)
}

/// File-based storage for the document collection
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the JSON file at `path`
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonFileStore::new("./src/data.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the new contents are written to before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> Result<DocumentCollection, StorageError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(StorageError::IoError(e.to_string())),
        };

        let collection = decode_collection(&text)?;
        tracing::debug!(
            path = %self.path.display(),
            documents = collection.len(),
            "Loaded document collection"
        );
        Ok(collection)
    }

    async fn save(&self, collection: &DocumentCollection) -> Result<(), StorageError> {
        let json = encode_collection(collection)?;

        // Replace via rename so a failed write never leaves a truncated file.
        let staging = self.staging_path();
        fs::write(&staging, json.as_bytes())
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        tracing::debug!(
            path = %self.path.display(),
            documents = collection.len(),
            "Saved document collection"
        );
        Ok(())
    }
}
