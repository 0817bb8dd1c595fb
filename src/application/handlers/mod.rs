//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod assign_docket_ids;
mod import_documents;
mod list_documents;
mod refresh_dockets;

pub use assign_docket_ids::AssignDocketIdsHandler;
pub use import_documents::{ImportDocumentsError, ImportDocumentsHandler, ImportReport};
pub use list_documents::{DocumentList, ListDocumentsHandler, ListDocumentsQuery};
pub use refresh_dockets::{
    reconcile_dockets, RefreshDocketsError, RefreshDocketsHandler, RefreshReport, Throttle,
};
