//! Storage errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error from a durable storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No durable store exists in this environment.
    #[error("durable storage is unavailable")]
    Unavailable,

    /// The backing file could not be read or written.
    #[error("storage i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON string map.
    #[error("malformed storage file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The browser rejected the operation (disabled storage, quota, policy).
    #[error("browser storage error: {0}")]
    Browser(String),
}
