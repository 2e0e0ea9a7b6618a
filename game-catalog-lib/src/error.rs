use thiserror::Error;

/// Errors raised by a durable key-value store.
///
/// None of these are fatal to the favorites store: in-memory state stays
/// authoritative and the error is logged and surfaced to subscribers.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error while reading or writing the backing file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key contains characters the store cannot map to a file name
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Write would exceed the store's size limit
    #[error("Storage quota exceeded: {needed} bytes needed, {available} available")]
    QuotaExceeded { needed: usize, available: usize },

    /// Storage is disabled or otherwise not reachable
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey(key.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
