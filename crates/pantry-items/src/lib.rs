//! Item store for Pantry.
//!
//! Validates form input before anything is written, files items under
//! locations by id, and returns listings ordered by expiration date.
//!
//! - [`error`]: Error types for item operations
//! - [`filter`]: [`ItemFilter`], listing order, and [`ItemListing`]
//! - [`store`]: The [`ItemStore`]

pub mod error;
pub mod filter;
pub mod store;

pub use error::{ItemError, Result};
pub use filter::{listing_order, ItemFilter, ItemListing};
pub use store::ItemStore;
