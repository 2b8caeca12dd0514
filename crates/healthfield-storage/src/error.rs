//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using device-local storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage area is not available on this device.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Failed to serialize or deserialize a stored payload.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend rejected the operation (quota exceeded, security error).
    #[error("Storage operation failed: {0}")]
    Backend(String),
}
