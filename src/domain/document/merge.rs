//! Merges freshly fetched documents into the curated collection.

use std::collections::{HashMap, HashSet};

use super::{Document, DocumentCollection};
use crate::domain::foundation::{DocumentId, ValidationError};

/// Outcome of a merge.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub collection: DocumentCollection,
    /// Fetched documents that were not in the existing collection.
    pub added: usize,
    /// Existing documents absent from the fetch, kept as-is.
    pub retained: usize,
}

/// Merges `fetched` into `existing`.
///
/// Fetched documents win for title, date, url and type; status, challenges
/// and unknown fields come from the existing copy. Existing documents the
/// fetch did not return are kept. The result is sorted by issue date,
/// newest first, ties keeping merge order. A document id fetched twice is
/// only taken once.
pub fn merge_documents(
    fetched: Vec<Document>,
    existing: DocumentCollection,
) -> Result<MergeOutcome, ValidationError> {
    let mut existing_by_id: HashMap<DocumentId, Document> = HashMap::new();
    let mut existing_order = Vec::with_capacity(existing.len());
    for document in existing.into_documents() {
        existing_order.push(document.id.clone());
        existing_by_id.insert(document.id.clone(), document);
    }

    let mut merged = Vec::with_capacity(fetched.len() + existing_order.len());
    let mut seen = HashSet::new();
    let mut added = 0;

    for mut document in fetched {
        if !seen.insert(document.id.clone()) {
            continue;
        }
        match existing_by_id.remove(&document.id) {
            Some(previous) => document.adopt_curation(previous),
            None => added += 1,
        }
        merged.push(document);
    }

    let mut retained = 0;
    for id in existing_order {
        if let Some(document) = existing_by_id.remove(&id) {
            merged.push(document);
            retained += 1;
        }
    }

    merged.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(MergeOutcome {
        collection: DocumentCollection::new(merged)?,
        added,
        retained,
    })
}
