//! DocumentCollection - the ordered set of tracked documents.

use serde::Serialize;
use std::collections::HashSet;

use super::Document;
use crate::domain::foundation::{DocumentId, ValidationError};

/// Ordered documents with unique identifiers.
///
/// Order is the order of the backing file and is never changed by
/// reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DocumentCollection {
    documents: Vec<Document>,
}

impl DocumentCollection {
    /// Builds a collection, rejecting duplicate document ids.
    pub fn new(documents: Vec<Document>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(documents.len());
        for document in &documents {
            if !seen.insert(document.id.as_str()) {
                return Err(ValidationError::duplicate("id", document.id.as_str()));
            }
        }
        Ok(Self { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Mutable access to documents.
    ///
    /// Only field values may change through this view; the slice cannot
    /// add, remove or reorder entries.
    pub fn documents_mut(&mut self) -> &mut [Document] {
        &mut self.documents
    }

    pub fn find(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|document| &document.id == id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of challenges linked to a docket.
    pub fn tracked_challenge_count(&self) -> usize {
        self.documents
            .iter()
            .flat_map(|document| &document.challenges)
            .filter(|challenge| challenge.tracked_docket().is_some())
            .count()
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Challenge;
    use crate::domain::foundation::DocketId;

    fn document(id: &str) -> Document {
        Document::new(
            DocumentId::new(id).unwrap(),
            format!("Order {}", id),
            "2025-01-20".parse().unwrap(),
            format!("https://example.com/{}", id),
        )
    }

    #[test]
    fn accepts_unique_ids_in_order() {
        let collection =
            DocumentCollection::new(vec![document("3"), document("1"), document("2")]).unwrap();
        let ids: Vec<&str> = collection
            .documents()
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = DocumentCollection::new(vec![document("1"), document("2"), document("1")]);
        assert!(matches!(
            result,
            Err(ValidationError::Duplicate { ref value, .. }) if value == "1"
        ));
    }

    #[test]
    fn find_by_id() {
        let collection = DocumentCollection::new(vec![document("1"), document("2")]).unwrap();
        let id = DocumentId::new("2").unwrap();
        assert_eq!(collection.find(&id).unwrap().title, "Order 2");
        assert!(collection.find(&DocumentId::new("9").unwrap()).is_none());
    }

    #[test]
    fn counts_only_tracked_challenges() {
        let doc = document("1")
            .with_challenge(Challenge::new("A", "a").with_docket(DocketId::new("10").unwrap()))
            .with_challenge(Challenge::new("B", "b"));
        let collection = DocumentCollection::new(vec![doc, document("2")]).unwrap();
        assert_eq!(collection.tracked_challenge_count(), 1);
    }

    #[test]
    fn serializes_as_plain_array() {
        let collection = DocumentCollection::default();
        assert_eq!(serde_json::to_string(&collection).unwrap(), "[]");
    }
}
