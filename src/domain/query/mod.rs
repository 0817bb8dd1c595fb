//! Query module - the read-only projection shown to readers.
//!
//! Pure and synchronous: every function borrows an immutable snapshot of the
//! documents and returns a new projection.

mod filter;
mod projection;
mod recency;
mod sort;

pub use filter::{DocumentFilter, StatusFilter, TypeSelection};
pub use projection::ViewState;
pub use recency::{
    challenge_recently_updated, document_recently_updated, is_recent, RECENT_WINDOW_HOURS,
};
pub use sort::{SortDirection, SortKey, SortState};
