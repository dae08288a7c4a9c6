//! Error types for registry operations.

use pantry_store::StoreError;
use pantry_types::{ErrorKind, LocationId};
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The name is empty after trimming.
    #[error("location name must not be empty")]
    EmptyName,

    /// The name is reserved for the aggregate location.
    #[error("location name is reserved: {name}")]
    ReservedName { name: String },

    /// Another location already uses this name (ignoring case).
    #[error("location already exists: {name}")]
    DuplicateName { name: String },

    /// The location is protected and cannot be renamed or deleted.
    #[error("location is protected: {name}")]
    Protected { name: String },

    /// No location has this id.
    #[error("location not found: {id}")]
    NotFound { id: LocationId },

    /// The backing store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName | Self::ReservedName { .. } | Self::DuplicateName { .. } => {
                ErrorKind::Validation
            }
            Self::Protected { .. } => ErrorKind::Protected,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Store(e) => e.kind(),
        }
    }
}

/// Convenience type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
