//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' must be unique, '{value}' appears more than once")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A date or timestamp string that could not be read as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{value}': expected YYYY-MM-DD or an ISO 8601 timestamp")]
pub struct DateParseError {
    pub value: String,
}

impl DateParseError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("id");
        assert_eq!(format!("{}", err), "Field 'id' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("status", "unknown value 'pending'");
        assert_eq!(
            format!("{}", err),
            "Field 'status' has invalid format: unknown value 'pending'"
        );
    }

    #[test]
    fn validation_error_duplicate_displays_correctly() {
        let err = ValidationError::duplicate("id", "14151");
        assert_eq!(
            format!("{}", err),
            "Field 'id' must be unique, '14151' appears more than once"
        );
    }

    #[test]
    fn date_parse_error_names_the_value() {
        let err = DateParseError::new("yesterday");
        assert!(err.to_string().contains("'yesterday'"));
    }
}
