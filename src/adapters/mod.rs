//! Adapters - Implementations of the ports.
//!
//! - `courtlistener` - Docket lookups (DocketSource)
//! - `federal_register` - Published documents (DocumentFeed)
//! - `storage` - The document collection on disk or in memory (DocumentStore)
//! - `clock` - System and fixed clocks (Clock)

pub mod clock;
pub mod courtlistener;
pub mod federal_register;
pub mod storage;
