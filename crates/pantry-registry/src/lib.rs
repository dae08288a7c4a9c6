//! Location registry for Pantry.
//!
//! Locations are the named storage buckets items are filed under. The
//! registry owns their lifecycle and enforces the rules a plain store
//! cannot:
//!
//! - **Seeding**: "All", "Fridge", "Freezer", "Pantry" are created once, on
//!   an empty store. Seeding again is a no-op.
//! - **Uniqueness**: names are unique case-insensitively; "All" is reserved.
//! - **Protection**: "All" is the aggregate tab and can be neither renamed
//!   nor deleted.
//! - **Cascade**: deleting a location clears the reference on every item
//!   filed under it, in the same atomic batch.
//!
//! # Modules
//!
//! - [`error`]: Error types for registry operations
//! - [`names`]: Location name validation
//! - [`registry`]: The [`LocationRegistry`] itself

pub mod error;
pub mod names;
pub mod registry;

pub use error::{RegistryError, Result};
pub use names::{is_reserved, validate_location_name};
pub use registry::{sort_for_display, LocationRegistry};
