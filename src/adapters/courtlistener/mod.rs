//! CourtListener Adapters
//!
//! - **CourtListenerClient** - Docket lookups against the CourtListener REST API
//! - **MockDocketSource** - Scripted docket lookups for tests

mod client;
mod mock;

pub use client::{CourtListenerClient, CourtListenerConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use mock::{MockDocketResponse, MockDocketSource};
