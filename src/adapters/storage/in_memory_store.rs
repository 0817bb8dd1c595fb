//! In-memory Document Store Adapter
//!
//! Holds the collection in memory and counts saves. Used in tests and for
//! dry runs where nothing should reach disk.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::document::DocumentCollection;
use crate::ports::{DocumentStore, StorageError};

#[derive(Debug, Default)]
struct State {
    collection: Option<DocumentCollection>,
    save_count: usize,
    fail_saves: bool,
}

/// In-memory storage for the document collection
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store; `load` reports `NotFound` until a save.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: DocumentCollection) -> Self {
        let store = Self::default();
        store.lock().collection = Some(collection);
        store
    }

    /// Makes every subsequent save fail with an IO error.
    pub fn failing_saves(self) -> Self {
        self.lock().fail_saves = true;
        self
    }

    /// Current contents, if any.
    pub fn snapshot(&self) -> Option<DocumentCollection> {
        self.lock().collection.clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn load(&self) -> Result<DocumentCollection, StorageError> {
        self.lock()
            .collection
            .clone()
            .ok_or_else(|| StorageError::NotFound(PathBuf::from("<memory>")))
    }

    async fn save(&self, collection: &DocumentCollection) -> Result<(), StorageError> {
        let mut state = self.lock();
        if state.fail_saves {
            return Err(StorageError::IoError("simulated write failure".to_string()));
        }
        state.collection = Some(collection.clone());
        state.save_count += 1;
        Ok(())
    }
}
