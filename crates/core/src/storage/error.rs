use thiserror::Error;

/// Errors that can occur in a persistence adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed store file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Store lock poisoned")]
    Poisoned,
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, StorageError>;
