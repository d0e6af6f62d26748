use thiserror::Error;

/// Platform-wide error types for the Oilseed Value Chain Platform.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Caller-supplied input rejected before any I/O (empty batch id, etc.).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The record store could not be reached or returned an error on read.
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// Storage layer error on write (RocksDB put/delete, index maintenance).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Resource not found. Note: a batch with zero traceability records is
    /// NOT this error; that is the `ChainResult::NotFound` outcome.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication error (unknown user, bad credentials).
    #[error("Auth error: {0}")]
    Auth(String),
}

impl From<serde_json::Error> for PlatformError {
    fn from(e: serde_json::Error) -> Self {
        PlatformError::Serialization(e.to_string())
    }
}
