mod error;
mod traits;

pub use error::{Result, StorageError};
pub use traits::PersistenceAdapter;

/// Adapter key under which the calendar's event blob is stored.
pub const EVENTS_KEY: &str = "calendarEvents";
