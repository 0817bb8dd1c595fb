//! Storage Adapters
//!
//! Implementations of the DocumentStore port.
//!
//! ## Available Adapters
//!
//! - **JsonFileStore** - The collection as a JSON array on disk
//! - **InMemoryDocumentStore** - The collection in memory (testing/dry runs)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryDocumentStore, JsonFileStore};
//!
//! // Production: the checked-in data file
//! let store = JsonFileStore::new("./src/data.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryDocumentStore::with_collection(collection);
//! ```

mod in_memory_store;
mod json_file_store;

pub use in_memory_store::InMemoryDocumentStore;
pub use json_file_store::{decode_collection, encode_collection, JsonFileStore};
