//! Clock Port - Injectable source of the current time.

use crate::domain::foundation::Timestamp;

/// Port for reading the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
