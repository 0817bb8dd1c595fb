//! DocumentType enum for the kind of presidential document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Kind of presidential document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    #[default]
    ExecutiveOrder,
    Proclamation,
}

impl DocumentType {
    pub const ALL: [DocumentType; 2] = [DocumentType::ExecutiveOrder, DocumentType::Proclamation];

    /// The value used on disk, on the command line and by the Federal Register.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::ExecutiveOrder => "executive_order",
            DocumentType::Proclamation => "proclamation",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentType::ExecutiveOrder => "Executive Order",
            DocumentType::Proclamation => "Proclamation",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DocumentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid_format("type", format!("unknown document type '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_executive_order() {
        assert_eq!(DocumentType::default(), DocumentType::ExecutiveOrder);
    }

    #[test]
    fn parses_wire_and_dashed_forms() {
        assert_eq!(
            "executive_order".parse::<DocumentType>().unwrap(),
            DocumentType::ExecutiveOrder
        );
        assert_eq!(
            "executive-order".parse::<DocumentType>().unwrap(),
            DocumentType::ExecutiveOrder
        );
        assert_eq!(
            "Proclamation".parse::<DocumentType>().unwrap(),
            DocumentType::Proclamation
        );
    }

    #[test]
    fn rejects_unknown_type() {
        assert!("memorandum".parse::<DocumentType>().is_err());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&DocumentType::ExecutiveOrder).unwrap(),
            "\"executive_order\""
        );
    }
}
