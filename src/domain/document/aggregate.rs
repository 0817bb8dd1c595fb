//! Document - a tracked executive order or proclamation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::layout::{read_record, write_record, KeyOrder};
use super::Challenge;
use crate::domain::foundation::{CalendarDate, DocumentId, DocumentStatus, DocumentType};

/// A tracked presidential document and the challenges filed against it.
///
/// Documents read from disk are written back in the key order they were
/// read with; documents built in code use the field order below.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,

    /// Issue (publication) date.
    pub date: CalendarDate,
    pub url: String,
    pub status: DocumentStatus,

    /// Absent in files predating document types, which only hold executive
    /// orders. Read it through `document_type()`.
    pub document_type: Option<DocumentType>,

    pub challenges: Vec<Challenge>,

    /// Fields this crate does not model, kept so rewrites do not drop them.
    pub extra: Map<String, Value>,

    layout: KeyOrder,
}

/// On-disk shape of a document.
#[derive(Serialize, Deserialize)]
struct DocumentRecord {
    id: DocumentId,
    title: String,
    date: CalendarDate,
    url: String,
    status: DocumentStatus,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    document_type: Option<DocumentType>,
    #[serde(default)]
    challenges: Vec<Challenge>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Document {
    /// Creates an enacted executive order with no challenges.
    pub fn new(
        id: DocumentId,
        title: impl Into<String>,
        date: CalendarDate,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            url: url.into(),
            status: DocumentStatus::Enacted,
            document_type: None,
            challenges: Vec::new(),
            extra: Map::new(),
            layout: KeyOrder::default(),
        }
    }

    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = Some(document_type);
        self
    }

    /// The kind of document, executive order when the file does not say.
    pub fn document_type(&self) -> DocumentType {
        self.document_type.unwrap_or_default()
    }

    pub fn with_challenge(mut self, challenge: Challenge) -> Self {
        self.challenges.push(challenge);
        self
    }

    /// Most recent `lastUpdated` across all challenges.
    ///
    /// `None` when there are no challenges or none has been resolved yet.
    pub fn latest_challenge_update(&self) -> Option<CalendarDate> {
        self.challenges
            .iter()
            .filter_map(|challenge| challenge.last_updated)
            .max()
    }

    /// Carries human-curated fields over from an older copy of this document.
    ///
    /// The older copy's key order is kept as well.
    pub fn adopt_curation(&mut self, previous: Document) {
        self.status = previous.status;
        self.challenges = previous.challenges;
        for (key, value) in previous.extra {
            self.extra.entry(key).or_insert(value);
        }
        self.layout = previous.layout;
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.date == other.date
            && self.url == other.url
            && self.status == other.status
            && self.document_type == other.document_type
            && self.challenges == other.challenges
            && self.extra == other.extra
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = DocumentRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            date: self.date,
            url: self.url.clone(),
            status: self.status,
            document_type: self.document_type,
            challenges: self.challenges.clone(),
            extra: self.extra.clone(),
        };
        write_record(&record, &self.layout, serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let layout = KeyOrder::of(&object);
        let record: DocumentRecord = read_record::<_, D::Error>(object)?;

        Ok(Self {
            id: record.id,
            title: record.title,
            date: record.date,
            url: record.url,
            status: record.status,
            document_type: record.document_type,
            challenges: record.challenges,
            extra: record.extra,
            layout,
        })
    }
}
