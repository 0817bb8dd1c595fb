//! Challenge - a court case filed against a tracked document.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::layout::{read_record, write_record, KeyOrder};
use crate::domain::foundation::{CalendarDate, DocketId};

/// A legal case challenging a document, optionally linked to a docket.
#[derive(Debug, Clone)]
pub struct Challenge {
    pub title: String,
    pub url: String,

    /// Absent means the case is not tracked against a docket.
    pub docket_id: Option<DocketId>,

    /// Absent means the docket has never been resolved.
    pub last_updated: Option<CalendarDate>,

    /// Fields this crate does not model, kept so rewrites do not drop them.
    pub extra: Map<String, Value>,

    /// `false` when `lastUpdated` was read as something other than
    /// `YYYY-MM-DD`, such as a full timestamp from older tooling.
    last_updated_normalized: bool,
    layout: KeyOrder,
}

/// On-disk shape of a challenge.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChallengeRecord {
    title: String,
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    docket_id: Option<DocketId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_updated: Option<CalendarDate>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Challenge {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            docket_id: None,
            last_updated: None,
            extra: Map::new(),
            last_updated_normalized: true,
            layout: KeyOrder::default(),
        }
    }

    pub fn with_docket(mut self, docket_id: DocketId) -> Self {
        self.docket_id = Some(docket_id);
        self
    }

    pub fn with_last_updated(mut self, date: CalendarDate) -> Self {
        self.last_updated = Some(date);
        self.last_updated_normalized = true;
        self
    }

    /// The docket to poll, if this challenge is tracked.
    ///
    /// A blank `docketId` in the file counts as untracked.
    pub fn tracked_docket(&self) -> Option<&DocketId> {
        self.docket_id.as_ref().filter(|id| !id.is_blank())
    }

    /// Records a new modification date.
    ///
    /// Returns `true` if the stored value changed, including when the same
    /// day was stored in a non-`YYYY-MM-DD` form.
    pub fn record_update(&mut self, date: CalendarDate) -> bool {
        if self.last_updated == Some(date) && self.last_updated_normalized {
            return false;
        }
        self.last_updated = Some(date);
        self.last_updated_normalized = true;
        true
    }
}

impl PartialEq for Challenge {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.url == other.url
            && self.docket_id == other.docket_id
            && self.last_updated == other.last_updated
            && self.extra == other.extra
    }
}

impl Serialize for Challenge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = ChallengeRecord {
            title: self.title.clone(),
            url: self.url.clone(),
            docket_id: self.docket_id.clone(),
            last_updated: self.last_updated,
            extra: self.extra.clone(),
        };
        write_record(&record, &self.layout, serializer)
    }
}

impl<'de> Deserialize<'de> for Challenge {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let layout = KeyOrder::of(&object);
        let stored = object
            .get("lastUpdated")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let record: ChallengeRecord = read_record::<_, D::Error>(object)?;

        let last_updated_normalized = match (&stored, record.last_updated) {
            (Some(raw), Some(date)) => *raw == date.to_string(),
            _ => true,
        };

        Ok(Self {
            title: record.title,
            url: record.url,
            docket_id: record.docket_id,
            last_updated: record.last_updated,
            extra: record.extra,
            last_updated_normalized,
            layout,
        })
    }
}
