//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the EO Tracker domain.

mod calendar_date;
mod document_status;
mod document_type;
mod errors;
mod ids;
mod timestamp;

pub use calendar_date::CalendarDate;
pub use document_status::DocumentStatus;
pub use document_type::DocumentType;
pub use errors::{DateParseError, ValidationError};
pub use ids::{DocketId, DocumentId};
pub use timestamp::Timestamp;
