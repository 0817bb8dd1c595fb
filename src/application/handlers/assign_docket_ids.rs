//! AssignDocketIdsHandler - Fills in docket ids from challenge URLs.

use std::sync::Arc;

use crate::domain::document::assign_docket_ids;
use crate::ports::{DocumentStore, StorageError};

/// Handler for docket-id assignment.
pub struct AssignDocketIdsHandler {
    store: Arc<dyn DocumentStore>,
}

impl AssignDocketIdsHandler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Returns the number of docket ids assigned. Saves only if non-zero.
    pub async fn handle(&self) -> Result<usize, StorageError> {
        let mut collection = self.store.load().await?;
        let assigned = assign_docket_ids(&mut collection);

        if assigned > 0 {
            self.store.save(&collection).await?;
        }
        tracing::info!(assigned, "Docket id assignment finished");

        Ok(assigned)
    }
}
