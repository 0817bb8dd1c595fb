//! RefreshDocketsHandler - Command handler for the docket updater.
//!
//! Loads the collection, polls the docket of every tracked challenge,
//! rewrites `lastUpdated` as the calendar date of the docket's
//! `date_modified`, and saves only when at least one value changed.
//! Per-docket failures are logged and skipped; storage failures abort.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::document::DocumentCollection;
use crate::domain::foundation::CalendarDate;
use crate::ports::{DocketSource, DocumentStore, StorageError};

/// Fixed pause between successive docket requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    /// No pause at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// Counters for one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Dockets requested.
    pub checked: usize,
    /// Challenges whose `lastUpdated` was rewritten.
    pub updated: usize,
    /// Successful lookups that left the challenge as it was.
    pub unchanged: usize,
    /// Lookups that failed or returned an unparseable timestamp.
    pub failed: usize,
}

impl RefreshReport {
    pub fn changed(&self) -> bool {
        self.updated > 0
    }
}

/// Reconciles every tracked challenge in `collection` against `dockets`.
///
/// Mutates in place and never fails; element order is untouched.
pub async fn reconcile_dockets(
    collection: &mut DocumentCollection,
    dockets: &dyn DocketSource,
    throttle: &Throttle,
) -> RefreshReport {
    let mut report = RefreshReport::default();

    for document in collection.documents_mut() {
        for challenge in document.challenges.iter_mut() {
            let Some(docket_id) = challenge.tracked_docket().cloned() else {
                continue;
            };

            if report.checked > 0 {
                throttle.wait().await;
            }
            report.checked += 1;

            let metadata = match dockets.fetch_docket(&docket_id).await {
                Ok(metadata) => metadata,
                Err(err) => {
                    tracing::warn!(
                        document_id = %document.id,
                        docket_id = %docket_id,
                        error = %err,
                        "Docket lookup failed"
                    );
                    report.failed += 1;
                    continue;
                }
            };

            let Some(raw) = metadata.date_modified else {
                tracing::debug!(docket_id = %docket_id, "Docket has no modification date");
                report.unchanged += 1;
                continue;
            };

            match CalendarDate::from_timestamp(&raw) {
                Ok(date) => {
                    if challenge.record_update(date) {
                        tracing::info!(
                            document_id = %document.id,
                            docket_id = %docket_id,
                            last_updated = %date,
                            "Challenge updated"
                        );
                        report.updated += 1;
                    } else {
                        report.unchanged += 1;
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        document_id = %document.id,
                        docket_id = %docket_id,
                        error = %err,
                        "Unparseable docket timestamp"
                    );
                    report.failed += 1;
                }
            }
        }
    }

    report
}

/// Error type for refreshing dockets.
#[derive(Debug, thiserror::Error)]
pub enum RefreshDocketsError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Handler for the docket updater.
pub struct RefreshDocketsHandler {
    store: Arc<dyn DocumentStore>,
    dockets: Arc<dyn DocketSource>,
    throttle: Throttle,
}

impl RefreshDocketsHandler {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        dockets: Arc<dyn DocketSource>,
        throttle: Throttle,
    ) -> Self {
        Self {
            store,
            dockets,
            throttle,
        }
    }

    pub async fn handle(&self) -> Result<RefreshReport, RefreshDocketsError> {
        let mut collection = self.store.load().await?;
        tracing::info!(
            documents = collection.len(),
            tracked = collection.tracked_challenge_count(),
            "Refreshing dockets"
        );

        let report = reconcile_dockets(&mut collection, self.dockets.as_ref(), &self.throttle).await;

        if report.changed() {
            self.store.save(&collection).await?;
            tracing::info!(
                updated = report.updated,
                failed = report.failed,
                "updated"
            );
        } else {
            tracing::info!(
                checked = report.checked,
                failed = report.failed,
                "no updates needed"
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::courtlistener::MockDocketSource;
    use crate::adapters::storage::InMemoryDocumentStore;
    use crate::domain::document::{Challenge, Document};
    use crate::domain::foundation::{DocketId, DocumentId};
    use crate::ports::DocketError;

    // ─────────────────────────────────────────────────────────────────────
    // Fixtures
    // ─────────────────────────────────────────────────────────────────────

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn tracked(title: &str, docket: &str) -> Challenge {
        Challenge::new(title, format!("https://example.com/{}", docket))
            .with_docket(DocketId::new(docket).unwrap())
    }

    fn document(id: &str, challenges: Vec<Challenge>) -> Document {
        let mut document = Document::new(
            DocumentId::new(id).unwrap(),
            format!("Order {}", id),
            date("2025-01-20"),
            format!("https://example.com/eo/{}", id),
        );
        for challenge in challenges {
            document = document.with_challenge(challenge);
        }
        document
    }

    fn collection(documents: Vec<Document>) -> DocumentCollection {
        DocumentCollection::new(documents).unwrap()
    }

    fn last_updated(collection: &DocumentCollection, doc: usize, challenge: usize) -> Option<CalendarDate> {
        collection.documents()[doc].challenges[challenge].last_updated
    }

    // ─────────────────────────────────────────────────────────────────────
    // reconcile_dockets
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn failed_docket_is_skipped_and_next_is_updated() {
        let mut docs = collection(vec![document(
            "14151",
            vec![tracked("A v. B", "500"), tracked("C v. D", "200")],
        )]);
        let dockets = MockDocketSource::new()
            .with_status("500", 500)
            .with_modified("200", "2025-03-01T12:00:00Z");

        let report = reconcile_dockets(&mut docs, &dockets, &Throttle::none()).await;

        assert_eq!(last_updated(&docs, 0, 0), None);
        assert_eq!(last_updated(&docs, 0, 1), Some(date("2025-03-01")));
        assert_eq!(
            report,
            RefreshReport {
                checked: 2,
                updated: 1,
                unchanged: 0,
                failed: 1
            }
        );
        assert!(report.changed());
    }

    #[tokio::test]
    async fn documents_without_challenges_make_no_requests() {
        let mut docs = collection(vec![document("1", vec![]), document("2", vec![])]);
        let dockets = MockDocketSource::new();

        let report = reconcile_dockets(&mut docs, &dockets, &Throttle::none()).await;

        assert_eq!(dockets.call_count(), 0);
        assert!(!report.changed());
    }

    #[tokio::test]
    async fn untracked_challenges_are_never_touched() {
        let untracked = Challenge::new("E v. F", "https://example.com/e");
        let blank: Challenge = serde_json::from_value(serde_json::json!({
            "title": "G v. H",
            "url": "https://example.com/g",
            "docketId": ""
        }))
        .unwrap();
        let mut docs = collection(vec![document("1", vec![untracked, blank])]);
        let before = docs.clone();
        let dockets = MockDocketSource::new();

        let report = reconcile_dockets(&mut docs, &dockets, &Throttle::none()).await;

        assert_eq!(dockets.call_count(), 0);
        assert_eq!(report.checked, 0);
        assert_eq!(docs, before);
    }

    #[tokio::test]
    async fn same_date_counts_as_unchanged() {
        let mut docs = collection(vec![document(
            "1",
            vec![tracked("A v. B", "7").with_last_updated(date("2025-03-01"))],
        )]);
        let dockets = MockDocketSource::new().with_modified("7", "2025-03-01T23:59:59-08:00");

        let report = reconcile_dockets(&mut docs, &dockets, &Throttle::none()).await;

        assert_eq!(report.unchanged, 1);
        assert!(!report.changed());
    }

    #[tokio::test]
    async fn missing_timestamp_means_nothing_to_update() {
        let mut docs = collection(vec![document("1", vec![tracked("A v. B", "7")])]);
        let dockets = MockDocketSource::new().with_no_timestamp("7");

        let report = reconcile_dockets(&mut docs, &dockets, &Throttle::none()).await;

        assert_eq!(last_updated(&docs, 0, 0), None);
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.failed, 0);
    }

    #[tokio::test]
    async fn unparseable_timestamp_is_a_failure() {
        let mut docs = collection(vec![document(
            "1",
            vec![tracked("A v. B", "7").with_last_updated(date("2025-02-01"))],
        )]);
        let dockets = MockDocketSource::new().with_modified("7", "last tuesday");

        let report = reconcile_dockets(&mut docs, &dockets, &Throttle::none()).await;

        assert_eq!(last_updated(&docs, 0, 0), Some(date("2025-02-01")));
        assert_eq!(report.failed, 1);
    }

    #[tokio::test]
    async fn transport_errors_do_not_stop_the_pass() {
        let mut docs = collection(vec![
            document("1", vec![tracked("A v. B", "1")]),
            document("2", vec![tracked("C v. D", "2")]),
        ]);
        let dockets = MockDocketSource::new()
            .with_error("1", DocketError::Timeout { timeout_secs: 30 })
            .with_modified("2", "2025-04-02");

        let report = reconcile_dockets(&mut docs, &dockets, &Throttle::none()).await;

        assert_eq!(report.failed, 1);
        assert_eq!(last_updated(&docs, 1, 0), Some(date("2025-04-02")));
    }

    #[tokio::test]
    async fn dockets_are_requested_in_collection_order() {
        let mut docs = collection(vec![
            document("1", vec![tracked("A", "30"), tracked("B", "10")]),
            document("2", vec![tracked("C", "20")]),
        ]);
        let dockets = MockDocketSource::new();

        reconcile_dockets(&mut docs, &dockets, &Throttle::none()).await;

        let calls: Vec<String> = dockets.calls().iter().map(|id| id.to_string()).collect();
        assert_eq!(calls, vec!["30", "10", "20"]);
    }

    #[tokio::test(start_paused = true)]
    async fn throttle_pauses_between_requests_only() {
        let mut docs = collection(vec![document(
            "1",
            vec![tracked("A", "1"), tracked("B", "2"), tracked("C", "3")],
        )]);
        let dockets = MockDocketSource::new();
        let throttle = Throttle::fixed(Duration::from_secs(1));

        let started = tokio::time::Instant::now();
        reconcile_dockets(&mut docs, &dockets, &throttle).await;

        assert_eq!(started.elapsed(), Duration::from_secs(2));
    }

    // ─────────────────────────────────────────────────────────────────────
    // RefreshDocketsHandler
    // ─────────────────────────────────────────────────────────────────────

    fn handler(store: &InMemoryDocumentStore, dockets: MockDocketSource) -> RefreshDocketsHandler {
        RefreshDocketsHandler::new(Arc::new(store.clone()), Arc::new(dockets), Throttle::none())
    }

    #[tokio::test]
    async fn saves_once_when_something_changed() {
        let store = InMemoryDocumentStore::with_collection(collection(vec![document(
            "14151",
            vec![tracked("A v. B", "500"), tracked("C v. D", "200")],
        )]));
        let dockets = MockDocketSource::new()
            .with_status("500", 500)
            .with_modified("200", "2025-03-01T12:00:00Z");

        let report = handler(&store, dockets).handle().await.unwrap();

        assert_eq!(report.updated, 1);
        assert_eq!(store.save_count(), 1);
        let saved = store.snapshot().unwrap();
        assert_eq!(last_updated(&saved, 0, 1), Some(date("2025-03-01")));
    }

    #[tokio::test]
    async fn second_run_is_idempotent() {
        let store = InMemoryDocumentStore::with_collection(collection(vec![document(
            "1",
            vec![tracked("A v. B", "7")],
        )]));
        let dockets = || MockDocketSource::new().with_modified("7", "2025-03-01T12:00:00Z");

        handler(&store, dockets()).handle().await.unwrap();
        let second = handler(&store, dockets()).handle().await.unwrap();

        assert!(!second.changed());
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn legacy_timestamp_is_rewritten_as_date_once() {
        let legacy: Document = serde_json::from_value(serde_json::json!({
            "id": "14160",
            "title": "Order 14160",
            "date": "2025-01-29",
            "url": "https://example.com/eo/14160",
            "status": "challenged",
            "challenges": [{
                "title": "A v. B",
                "url": "https://example.com/7",
                "docketId": "7",
                "lastUpdated": "2025-03-01T00:00:00Z"
            }]
        }))
        .unwrap();
        let store = InMemoryDocumentStore::with_collection(collection(vec![legacy]));
        let dockets = || MockDocketSource::new().with_modified("7", "2025-03-01T12:00:00Z");

        let first = handler(&store, dockets()).handle().await.unwrap();
        let second = handler(&store, dockets()).handle().await.unwrap();

        assert!(first.changed());
        assert!(!second.changed());
        assert_eq!(store.save_count(), 1);
        let saved = serde_json::to_value(store.snapshot().unwrap()).unwrap();
        assert_eq!(saved[0]["challenges"][0]["lastUpdated"], "2025-03-01");
    }

    #[tokio::test]
    async fn does_not_save_without_changes() {
        let store = InMemoryDocumentStore::with_collection(collection(vec![document("1", vec![])]));

        let report = handler(&store, MockDocketSource::new()).handle().await.unwrap();

        assert_eq!(report, RefreshReport::default());
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn missing_data_file_aborts() {
        let store = InMemoryDocumentStore::new();

        let result = handler(&store, MockDocketSource::new()).handle().await;

        assert!(matches!(
            result,
            Err(RefreshDocketsError::Storage(StorageError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn save_failure_is_reported() {
        let store = InMemoryDocumentStore::with_collection(collection(vec![document(
            "1",
            vec![tracked("A v. B", "7")],
        )]))
        .failing_saves();
        let dockets = MockDocketSource::new().with_modified("7", "2025-03-01");

        let result = handler(&store, dockets).handle().await;

        assert!(matches!(
            result,
            Err(RefreshDocketsError::Storage(StorageError::IoError(_)))
        ));
    }
}
