//! "Recently updated" badge predicate.

use chrono::Duration;

use crate::domain::document::{Challenge, Document};
use crate::domain::foundation::{CalendarDate, Timestamp};

/// How far back an update still counts as recent.
pub const RECENT_WINDOW_HOURS: i64 = 48;

/// True when `last_updated` falls within the recent window before `now`.
///
/// The date is taken as midnight UTC. Dates after `now` count as recent.
pub fn is_recent(last_updated: CalendarDate, now: Timestamp) -> bool {
    now.duration_since(&Timestamp::from(last_updated)) <= Duration::hours(RECENT_WINDOW_HOURS)
}

pub fn challenge_recently_updated(challenge: &Challenge, now: Timestamp) -> bool {
    challenge
        .last_updated
        .is_some_and(|date| is_recent(date, now))
}

pub fn document_recently_updated(document: &Document, now: Timestamp) -> bool {
    document
        .challenges
        .iter()
        .any(|challenge| challenge_recently_updated(challenge, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DocumentId;
    use chrono::{DateTime, Utc};

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn within_window_is_recent() {
        let now = at("2025-03-02T12:00:00Z");
        assert!(is_recent(date("2025-03-02"), now));
        assert!(is_recent(date("2025-03-01"), now));
        assert!(is_recent(date("2025-02-28"), at("2025-03-02T00:00:00Z")));
    }

    #[test]
    fn outside_window_is_not_recent() {
        assert!(!is_recent(date("2025-02-28"), at("2025-03-02T00:00:01Z")));
        assert!(!is_recent(date("2025-01-01"), at("2025-03-02T00:00:00Z")));
    }

    #[test]
    fn future_dates_are_recent() {
        assert!(is_recent(date("2025-03-05"), at("2025-03-02T00:00:00Z")));
    }

    #[test]
    fn challenge_without_date_is_not_recent() {
        let challenge = Challenge::new("Case", "https://example.com");
        assert!(!challenge_recently_updated(&challenge, Timestamp::now()));
    }

    #[test]
    fn document_recent_if_any_challenge_is() {
        let now = at("2025-03-02T12:00:00Z");
        let doc = Document::new(
            DocumentId::new("1").unwrap(),
            "Order",
            date("2025-01-20"),
            "https://example.com",
        )
        .with_challenge(Challenge::new("Old", "a").with_last_updated(date("2025-01-01")))
        .with_challenge(Challenge::new("New", "b").with_last_updated(date("2025-03-01")));
        assert!(document_recently_updated(&doc, now));
    }
}
