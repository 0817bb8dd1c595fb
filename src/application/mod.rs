//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (`update`, `assign-dockets`, `import`) write the collection;
//! the list query only reads it.

pub mod handlers;

pub use handlers::{
    reconcile_dockets, AssignDocketIdsHandler, DocumentList, ImportDocumentsError,
    ImportDocumentsHandler, ImportReport, ListDocumentsHandler, ListDocumentsQuery,
    RefreshDocketsError, RefreshDocketsHandler, RefreshReport, Throttle,
};
