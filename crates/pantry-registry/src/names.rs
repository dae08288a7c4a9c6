//! Location name validation.
//!
//! Valid location names:
//! - Must be non-empty after trimming surrounding whitespace
//! - Must not be "All" in any casing
//! - Must not match another location's name, ignoring case
//!
//! Stored names are the trimmed input with its casing preserved.

use pantry_types::{Location, LocationId, ALL_LOCATION};

use crate::error::{RegistryError, Result};

/// Returns `true` if `name` is the reserved aggregate name, in any casing.
pub fn is_reserved(name: &str) -> bool {
    name.trim().to_lowercase() == ALL_LOCATION.to_lowercase()
}

/// Validate `name` against `existing` and return the name to store.
///
/// `renaming` excludes that location from the collision check, so a
/// location may be renamed to a different casing of its own name.
///
/// # Examples
///
/// ```
/// use pantry_registry::names::validate_location_name;
/// use pantry_types::Location;
///
/// let existing = vec![Location::custom("Fridge")];
/// assert_eq!(validate_location_name("  Garage ", &existing, None).unwrap(), "Garage");
/// assert!(validate_location_name("fridge", &existing, None).is_err());
/// assert!(validate_location_name("ALL", &existing, None).is_err());
/// assert!(validate_location_name("   ", &existing, None).is_err());
/// ```
pub fn validate_location_name(
    name: &str,
    existing: &[Location],
    renaming: Option<&LocationId>,
) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::EmptyName);
    }
    if is_reserved(trimmed) {
        return Err(RegistryError::ReservedName {
            name: trimmed.to_string(),
        });
    }
    let collides = existing
        .iter()
        .filter(|l| Some(&l.id) != renaming)
        .any(|l| l.has_name(trimmed));
    if collides {
        return Err(RegistryError::DuplicateName {
            name: trimmed.to_string(),
        });
    }
    Ok(trimmed.to_string())
}
