//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocketSource` - Docket metadata lookup (CourtListener)
//! - `DocumentFeed` - Newly published documents (Federal Register)
//! - `DocumentStore` - Persistence of the document collection
//! - `Clock` - Current time, injectable for deterministic tests

mod clock;
mod docket_source;
mod document_feed;
mod document_store;

pub use clock::Clock;
pub use docket_source::{DocketError, DocketMetadata, DocketSource};
pub use document_feed::{DocumentFeed, FeedError};
pub use document_store::{DocumentStore, StorageError};
