//! High-level SDK for Pantry.
//!
//! [`Pantry`] ties the location registry, the item store and the
//! expiration rules together behind one API, with user preferences passed
//! in as an explicit [`Settings`] value. This is the entry point for the
//! CLI and for any other front end.

pub mod error;
pub mod pantry;
pub mod row;
pub mod settings;

pub use error::{SdkError, SdkResult};
pub use pantry::Pantry;
pub use row::ItemRow;
pub use settings::{Settings, SETTING_KEYS};

// Re-export key types
pub use pantry_expiry::{ExpirationStatus, ExpirySummary, Highlight, HighlightConfig, Threshold};
pub use pantry_items::{ItemFilter, ItemListing};
pub use pantry_store::{InMemoryPantryStore, JsonFileStore, PantryStore};
pub use pantry_types::{
    Clock, ErrorKind, FixedClock, Item, ItemFields, ItemId, Location, LocationId, Quantity,
    SystemClock, MAX_CUSTOM_LOCATIONS,
};
