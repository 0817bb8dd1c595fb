//! Document module - tracked documents, their challenges and the collection.
//!
//! # Module Organization
//!
//! - `aggregate` - The `Document` record
//! - `challenge` - Court challenges attached to a document
//! - `collection` - Ordered, id-unique `DocumentCollection`
//! - `docket_link` - Docket id extraction from challenge URLs
//! - `layout` - Key order kept across rewrites of the data file
//! - `merge` - Merging fetched documents into the curated collection

mod aggregate;
mod challenge;
mod collection;
mod docket_link;
mod layout;
mod merge;

pub use aggregate::Document;
pub use challenge::Challenge;
pub use collection::DocumentCollection;
pub use docket_link::{assign_docket_ids, extract_docket_id};
pub use merge::{merge_documents, MergeOutcome};
