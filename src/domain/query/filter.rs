//! Inclusion predicate for the document projection.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::document::Document;
use crate::domain::foundation::{DocumentStatus, DocumentType, ValidationError};

/// Status selector: everything, or a single status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(DocumentStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: DocumentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Only(status) => write!(f, "{}", status.as_str()),
        }
    }
}

/// Accepted document types. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSelection {
    accepted: BTreeSet<DocumentType>,
}

impl TypeSelection {
    pub fn all() -> Self {
        Self {
            accepted: DocumentType::ALL.into_iter().collect(),
        }
    }

    /// Accepts only the given types; an empty list means all types.
    pub fn only(types: impl IntoIterator<Item = DocumentType>) -> Self {
        let accepted: BTreeSet<DocumentType> = types.into_iter().collect();
        if accepted.is_empty() {
            return Self::all();
        }
        Self { accepted }
    }

    /// Switches a type on or off.
    ///
    /// Switching off the last accepted type resets the selection to all
    /// types, so the table never goes blank through type toggles.
    pub fn toggle(&mut self, document_type: DocumentType) {
        if !self.accepted.remove(&document_type) {
            self.accepted.insert(document_type);
        }
        if self.accepted.is_empty() {
            *self = Self::all();
        }
    }

    pub fn contains(&self, document_type: DocumentType) -> bool {
        self.accepted.contains(&document_type)
    }

    pub fn is_all(&self) -> bool {
        self.accepted.len() == DocumentType::ALL.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = DocumentType> + '_ {
        self.accepted.iter().copied()
    }
}

impl Default for TypeSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Search text, status and type criteria, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    /// Lowercased search text.
    needle: String,
    pub status: StatusFilter,
    pub types: TypeSelection,
}

impl DocumentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_types(mut self, types: TypeSelection) -> Self {
        self.types = types;
        self
    }

    pub fn set_query(&mut self, query: impl AsRef<str>) {
        self.needle = query.as_ref().to_lowercase();
    }

    pub fn query(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.matches_text(document)
            && self.status.matches(document.status)
            && self.types.contains(document.document_type())
    }

    /// Case-insensitive substring match on the document title, the document
    /// id, or any challenge title. The empty query matches everything.
    fn matches_text(&self, document: &Document) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(&self.needle);
        hit(&document.title)
            || hit(document.id.as_str())
            || document.challenges.iter().any(|c| hit(&c.title))
    }
}
