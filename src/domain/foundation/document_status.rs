//! DocumentStatus enum for the legal standing of a tracked document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Legal standing of a tracked document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// In effect, no court has intervened.
    #[default]
    Enacted,
    /// Challenged in court, outcome pending.
    Challenged,
    /// Struck down or blocked.
    Overturned,
    /// Litigation concluded without overturning the document.
    Resolved,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Enacted,
        DocumentStatus::Challenged,
        DocumentStatus::Overturned,
        DocumentStatus::Resolved,
    ];

    /// The value used on disk and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Enacted => "enacted",
            DocumentStatus::Challenged => "challenged",
            DocumentStatus::Overturned => "overturned",
            DocumentStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentStatus::Enacted => "Enacted",
            DocumentStatus::Challenged => "Challenged",
            DocumentStatus::Overturned => "Overturned",
            DocumentStatus::Resolved => "Resolved",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DocumentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid_format("status", format!("unknown status '{}'", s))
            })
    }
}
