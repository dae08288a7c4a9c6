//! Error types for item operations.

use pantry_store::StoreError;
use pantry_types::{ErrorKind, LocationId, TypeError};
use thiserror::Error;

/// Errors that can occur during item operations.
#[derive(Debug, Error)]
pub enum ItemError {
    /// The name is empty after trimming.
    #[error("item name must not be empty")]
    EmptyName,

    /// The quantity text does not parse to a positive amount.
    #[error(transparent)]
    InvalidQuantity(#[from] TypeError),

    /// The referenced location does not exist.
    #[error("unknown location: {id}")]
    UnknownLocation { id: LocationId },

    /// Items cannot be filed under the aggregate location.
    #[error("items cannot be filed under {name:?}")]
    AggregateLocation { name: String },

    /// A short id matches more than one item.
    #[error("id {reference:?} matches {matches} items")]
    AmbiguousId { reference: String, matches: usize },

    /// No item has this id.
    #[error("item not found: {id}")]
    NotFound { id: String },

    /// The backing store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ItemError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName
            | Self::InvalidQuantity(_)
            | Self::UnknownLocation { .. }
            | Self::AggregateLocation { .. }
            | Self::AmbiguousId { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Store(e) => e.kind(),
        }
    }
}

/// Convenience type alias for item operations.
pub type Result<T> = std::result::Result<T, ItemError>;
