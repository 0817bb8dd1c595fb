//! Derives CourtListener docket ids from challenge URLs.

use once_cell::sync::Lazy;
use regex::Regex;

use super::DocumentCollection;
use crate::domain::foundation::DocketId;

static DOCKET_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/docket/(\d+)/").expect("docket path pattern is valid")
});

/// Extracts the numeric id from a `.../docket/<digits>/...` URL.
pub fn extract_docket_id(url: &str) -> Option<DocketId> {
    let captures = DOCKET_PATH.captures(url)?;
    DocketId::new(captures.get(1)?.as_str()).ok()
}

/// Fills in missing docket ids from challenge URLs.
///
/// Challenges that already carry a non-blank docket id are left alone.
/// Returns the number of ids assigned.
pub fn assign_docket_ids(collection: &mut DocumentCollection) -> usize {
    let mut assigned = 0;
    for document in collection.documents_mut() {
        for challenge in &mut document.challenges {
            if challenge.tracked_docket().is_some() {
                continue;
            }
            if let Some(docket_id) = extract_docket_id(&challenge.url) {
                tracing::debug!(
                    document_id = %document.id,
                    docket_id = %docket_id,
                    "Assigned docket id from challenge URL"
                );
                challenge.docket_id = Some(docket_id);
                assigned += 1;
            }
        }
    }
    assigned
}
