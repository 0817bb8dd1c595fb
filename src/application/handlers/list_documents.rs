//! ListDocumentsHandler - Query handler for the document table.

use std::sync::Arc;

use crate::domain::document::Document;
use crate::domain::query::ViewState;
use crate::ports::{DocumentStore, StorageError};

/// Query for the projected document table.
#[derive(Debug, Clone, Default)]
pub struct ListDocumentsQuery {
    pub view: ViewState,
}

/// The projection plus the size of the unfiltered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentList {
    pub items: Vec<Document>,
    pub total: usize,
}

pub struct ListDocumentsHandler {
    store: Arc<dyn DocumentStore>,
}

impl ListDocumentsHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListDocumentsQuery) -> Result<DocumentList, StorageError> {
        let collection = self.store.load().await?;
        let items = query
            .view
            .project(collection.documents())
            .into_iter()
            .cloned()
            .collect();

        Ok(DocumentList {
            items,
            total: collection.len(),
        })
    }
}
