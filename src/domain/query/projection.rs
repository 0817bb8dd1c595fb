//! ViewState - the criteria behind the displayed table.

use super::{DocumentFilter, SortKey, SortState, StatusFilter};
use crate::domain::document::Document;
use crate::domain::foundation::DocumentType;

/// Search, filter and sort state of the document table.
///
/// Every change is followed by a fresh [`ViewState::project`] over the
/// unchanged collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter: DocumentFilter,
    pub sort: SortState,
}

impl ViewState {
    pub fn new(filter: DocumentFilter, sort: SortState) -> Self {
        Self { filter, sort }
    }

    pub fn set_query(&mut self, query: impl AsRef<str>) {
        self.filter.set_query(query);
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn toggle_type(&mut self, document_type: DocumentType) {
        self.filter.types.toggle(document_type);
    }

    pub fn select_sort(&mut self, key: SortKey) {
        self.sort.select(key);
    }

    pub fn show_recently_updated(&mut self) {
        self.sort.show_recently_updated();
    }

    /// Filters then sorts, borrowing from `documents`.
    pub fn project<'a>(&self, documents: &'a [Document]) -> Vec<&'a Document> {
        let mut projection: Vec<&Document> = documents
            .iter()
            .filter(|document| self.filter.matches(document))
            .collect();
        self.sort.sort(&mut projection);
        projection
    }
}
