use std::path::PathBuf;

use pantry_types::{ErrorKind, ItemId, LocationId};

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend refuses writes.
    #[error("store is read-only")]
    ReadOnly,

    /// A batch would leave an item pointing at a missing location.
    #[error("item {item} references missing location {location}")]
    DanglingReference { item: ItemId, location: LocationId },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The data file exists but cannot be decoded.
    #[error("corrupt data file {path:?}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// The data file was written by an incompatible version.
    #[error("unsupported data format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// A lock guarding the tables was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Persistence
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
