use std::env;

use daygrid_core::storage::EVENTS_KEY;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON store file (default: "daygrid_events.json")
    pub store_path: String,
    /// Adapter key under which the event blob is stored
    /// (default: "calendarEvents")
    pub store_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DAYGRID_STORE_PATH` - JSON store file path (default: "daygrid_events.json")
    /// - `DAYGRID_STORE_KEY` - event blob key (default: "calendarEvents")
    pub fn from_env() -> Self {
        Self {
            store_path: env::var("DAYGRID_STORE_PATH")
                .unwrap_or_else(|_| "daygrid_events.json".to_string()),
            store_key: env::var("DAYGRID_STORE_KEY").unwrap_or_else(|_| EVENTS_KEY.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
