//! Ordering for the document projection.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::document::Document;
use crate::domain::foundation::ValidationError;

/// Column the projection is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Title,
    /// Issue date.
    Date,
    /// Most recent `lastUpdated` across a document's challenges.
    RecentlyUpdated,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
            SortKey::Date => "date",
            SortKey::RecentlyUpdated => "recently_updated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "id" => Ok(SortKey::Id),
            "title" => Ok(SortKey::Title),
            "date" => Ok(SortKey::Date),
            "recently_updated" | "recent" | "updated" => Ok(SortKey::RecentlyUpdated),
            _ => Err(ValidationError::invalid_format(
                "sort",
                format!("unknown sort key '{}'", s),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Current sort column and direction, driven by header clicks.
///
/// Starts as issue date, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    key: SortKey,
    direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    /// The direction actually applied. Recency is always newest first.
    pub fn direction(&self) -> SortDirection {
        match self.key {
            SortKey::RecentlyUpdated => SortDirection::Descending,
            _ => self.direction,
        }
    }

    /// Handles a click on a sortable column.
    ///
    /// The active column flips direction; any other column starts ascending.
    pub fn select(&mut self, key: SortKey) {
        if key == SortKey::RecentlyUpdated {
            self.show_recently_updated();
        } else if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Switches to most recently updated first until another column is
    /// selected.
    pub fn show_recently_updated(&mut self) {
        self.key = SortKey::RecentlyUpdated;
        self.direction = SortDirection::Descending;
    }

    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        let ascending = match self.key {
            SortKey::Id => a.id.as_str().cmp(b.id.as_str()),
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Date => a.date.cmp(&b.date),
            // None sorts before every date, so undated documents end up last.
            SortKey::RecentlyUpdated => a
                .latest_challenge_update()
                .cmp(&b.latest_challenge_update()),
        };
        self.direction().apply(ascending)
    }

    /// Stable in-place sort; equal keys keep their relative order.
    pub fn sort(&self, documents: &mut [&Document]) {
        documents.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortKey::Date, SortDirection::Descending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Challenge;
    use crate::domain::foundation::DocumentId;

    fn document(id: &str, title: &str, date: &str) -> Document {
        Document::new(
            DocumentId::new(id).unwrap(),
            title,
            date.parse().unwrap(),
            "https://example.com",
        )
    }

    fn updated(doc: Document, last_updated: &str) -> Document {
        doc.with_challenge(
            Challenge::new("Case", "https://example.com/case")
                .with_last_updated(last_updated.parse().unwrap()),
        )
    }

    fn sorted_ids(state: SortState, docs: &[Document]) -> Vec<String> {
        let mut refs: Vec<&Document> = docs.iter().collect();
        state.sort(&mut refs);
        refs.iter().map(|d| d.id.to_string()).collect()
    }

    #[test]
    fn default_is_date_descending() {
        let state = SortState::default();
        assert_eq!(state.key(), SortKey::Date);
        assert_eq!(state.direction(), SortDirection::Descending);
    }

    #[test]
    fn selecting_same_key_flips_direction() {
        let mut state = SortState::new(SortKey::Title, SortDirection::Ascending);
        state.select(SortKey::Title);
        assert_eq!(state.direction(), SortDirection::Descending);
        state.select(SortKey::Title);
        assert_eq!(state.direction(), SortDirection::Ascending);
    }

    #[test]
    fn selecting_new_key_resets_to_ascending() {
        let mut state = SortState::default();
        state.select(SortKey::Id);
        assert_eq!(state.key(), SortKey::Id);
        assert_eq!(state.direction(), SortDirection::Ascending);
    }

    #[test]
    fn recently_updated_forces_descending() {
        let mut state = SortState::new(SortKey::Title, SortDirection::Ascending);
        state.show_recently_updated();
        assert_eq!(state.key(), SortKey::RecentlyUpdated);
        assert_eq!(state.direction(), SortDirection::Descending);

        // Re-selecting keeps newest first rather than flipping.
        state.select(SortKey::RecentlyUpdated);
        assert_eq!(state.direction(), SortDirection::Descending);

        state.select(SortKey::Date);
        assert_eq!(state.key(), SortKey::Date);
        assert_eq!(state.direction(), SortDirection::Ascending);
    }

    #[test]
    fn recency_ignores_stored_direction() {
        let state = SortState::new(SortKey::RecentlyUpdated, SortDirection::Ascending);
        assert_eq!(state.direction(), SortDirection::Descending);
    }

    #[test]
    fn recently_updated_orders_newest_first_and_undated_last() {
        let docs = vec![
            updated(document("A", "A", "2025-01-20"), "2025-01-10"),
            document("B", "B", "2025-01-20"),
            updated(document("C", "C", "2025-01-20"), "2025-01-20"),
        ];
        let mut state = SortState::default();
        state.show_recently_updated();
        assert_eq!(sorted_ids(state, &docs), vec!["C", "A", "B"]);
    }

    #[test]
    fn date_compares_by_calendar_time() {
        let docs = vec![
            document("1", "x", "2025-02-01"),
            document("2", "x", "2024-12-31"),
            document("3", "x", "2025-01-15"),
        ];
        let state = SortState::new(SortKey::Date, SortDirection::Ascending);
        assert_eq!(sorted_ids(state, &docs), vec!["2", "3", "1"]);
    }

    #[test]
    fn date_sort_is_stable_in_both_directions() {
        let docs = vec![
            document("a", "x", "2025-01-20"),
            document("b", "x", "2025-02-01"),
            document("c", "x", "2025-01-20"),
        ];
        let asc = SortState::new(SortKey::Date, SortDirection::Ascending);
        let desc = SortState::new(SortKey::Date, SortDirection::Descending);
        assert_eq!(sorted_ids(asc, &docs), vec!["a", "c", "b"]);
        assert_eq!(sorted_ids(desc, &docs), vec!["b", "a", "c"]);
    }

    #[test]
    fn title_and_id_use_string_ordering() {
        let docs = vec![
            document("14160", "Beta", "2025-01-20"),
            document("14151", "alpha", "2025-01-20"),
            document("9999", "Alpha", "2025-01-20"),
        ];
        let by_title = SortState::new(SortKey::Title, SortDirection::Ascending);
        assert_eq!(sorted_ids(by_title, &docs), vec!["9999", "14160", "14151"]);

        let by_id_desc = SortState::new(SortKey::Id, SortDirection::Descending);
        assert_eq!(sorted_ids(by_id_desc, &docs), vec!["9999", "14160", "14151"]);
    }

    #[test]
    fn sort_key_parses_aliases() {
        assert_eq!("recent".parse::<SortKey>().unwrap(), SortKey::RecentlyUpdated);
        assert_eq!(
            "recently-updated".parse::<SortKey>().unwrap(),
            SortKey::RecentlyUpdated
        );
        assert_eq!("Date".parse::<SortKey>().unwrap(), SortKey::Date);
        assert!("author".parse::<SortKey>().is_err());
    }
}
