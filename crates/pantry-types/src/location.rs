//! Storage locations (also called categories or tabs).

use serde::{Deserialize, Serialize};

use crate::identity::LocationId;

/// Name of the protected aggregate location.
pub const ALL_LOCATION: &str = "All";

/// Seeded locations as `(name, is_protected)`, in seeding order.
pub const DEFAULT_LOCATIONS: [(&str, bool); 4] = [
    (ALL_LOCATION, true),
    ("Fridge", false),
    ("Freezer", false),
    ("Pantry", false),
];

/// Maximum number of locations besides "All" a presentation layer should
/// allow. Not enforced by the registry.
pub const MAX_CUSTOM_LOCATIONS: usize = 5;

/// A named storage bucket for items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    /// Display form. Uniqueness is checked case-insensitively.
    pub name: String,
    /// One of the seeded locations.
    pub is_default: bool,
    /// Cannot be renamed or deleted. True only for "All".
    pub is_protected: bool,
}

impl Location {
    /// A user-created location.
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            id: LocationId::new(),
            name: name.into(),
            is_default: false,
            is_protected: false,
        }
    }

    /// A seeded location.
    pub fn seeded(name: impl Into<String>, is_protected: bool) -> Self {
        Self {
            id: LocationId::new(),
            name: name.into(),
            is_default: true,
            is_protected,
        }
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Returns `true` for the aggregate "All" location.
    pub fn is_all(&self) -> bool {
        self.is_protected && self.has_name(ALL_LOCATION)
    }
}
