//! Foundation types for Pantry.
//!
//! This crate provides the identity, record, and value types shared by every
//! other Pantry crate. It has no storage or policy logic of its own beyond
//! the pure quantity rules.
//!
//! # Key Types
//!
//! - [`LocationId`] / [`ItemId`]: UUID v7 record identifiers
//! - [`Location`]: a named storage bucket ("Fridge", "Pantry", ...)
//! - [`Item`]: an inventory record referencing a location by id
//! - [`ItemFields`]: raw form input for creating or editing an item
//! - [`Quantity`]: a positive amount with two decimal places
//! - [`Clock`]: source of "today" for date-relative rules
//! - [`ErrorKind`]: the error classes surfaced to a presentation layer

pub mod clock;
pub mod error;
pub mod identity;
pub mod item;
pub mod location;
pub mod quantity;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ErrorKind, TypeError};
pub use identity::{ItemId, LocationId};
pub use item::{Item, ItemFields, UNCATEGORIZED, UNKNOWN_DATE, UNNAMED};
pub use location::{Location, ALL_LOCATION, DEFAULT_LOCATIONS, MAX_CUSTOM_LOCATIONS};
pub use quantity::{format, parse_and_validate, sanitize, Quantity, MAX_QUANTITY_LEN};
