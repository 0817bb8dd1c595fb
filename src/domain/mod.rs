//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `document` - Tracked documents, court challenges and the collection
//! - `query` - Filter and sort projection over the collection

pub mod document;
pub mod foundation;
pub mod query;
