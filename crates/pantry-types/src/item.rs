//! Inventory records and the form input that creates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::{ItemId, LocationId};
use crate::quantity::Quantity;

/// Shown for an item whose stored name is blank.
pub const UNNAMED: &str = "Unnamed";
/// Shown for an absent date.
pub const UNKNOWN_DATE: &str = "Unknown";
/// Shown for an item with no location.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single inventory record.
///
/// The location is held by id only. Renaming a location therefore needs no
/// item writes, and deleting one clears `location` on every referencing item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub location: Option<LocationId>,
    pub quantity: Quantity,
    pub expiration_date: Option<NaiveDate>,
    pub obtained_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Item {
    /// Name for display, falling back to [`UNNAMED`].
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            UNNAMED
        } else {
            trimmed
        }
    }

    /// Expiration date for display, falling back to [`UNKNOWN_DATE`].
    pub fn display_expiration(&self) -> String {
        display_date(self.expiration_date)
    }

    /// Obtained date for display, falling back to [`UNKNOWN_DATE`].
    pub fn display_obtained(&self) -> String {
        display_date(self.obtained_date)
    }

    /// Returns `true` if this item is stored in `location`.
    pub fn is_in(&self, location: &LocationId) -> bool {
        self.location.as_ref() == Some(location)
    }
}

fn display_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// Raw values from an add or edit form.
///
/// The quantity stays as typed text; it is sanitized and validated by the
/// item store on save.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    pub location: Option<LocationId>,
    pub quantity_text: String,
    pub expiration_date: Option<NaiveDate>,
    pub obtained_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl ItemFields {
    pub fn new(name: impl Into<String>, quantity_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity_text: quantity_text.into(),
            ..Default::default()
        }
    }

    /// Prefill an edit form from a stored item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            location: item.location,
            quantity_text: item.quantity.to_string(),
            expiration_date: item.expiration_date,
            obtained_date: item.obtained_date,
            notes: item.notes.clone(),
        }
    }

    pub fn location(mut self, location: LocationId) -> Self {
        self.location = Some(location);
        self
    }

    pub fn expires(mut self, date: NaiveDate) -> Self {
        self.expiration_date = Some(date);
        self
    }

    pub fn obtained(mut self, date: NaiveDate) -> Self {
        self.obtained_date = Some(date);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// The name as it will be stored.
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    /// Notes as they will be stored: trimmed, blank becomes `None`.
    pub fn normalized_notes(&self) -> Option<String> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn milk() -> Item {
        Item {
            id: ItemId::new(),
            name: "Milk".into(),
            location: None,
            quantity: Quantity::ONE,
            expiration_date: Some(date(2025, 7, 20)),
            obtained_date: None,
            notes: None,
        }
    }

    #[test]
    fn display_name_falls_back() {
        let mut item = milk();
        assert_eq!(item.display_name(), "Milk");
        item.name = "   ".into();
        assert_eq!(item.display_name(), UNNAMED);
    }

    #[test]
    fn display_dates() {
        let item = milk();
        assert_eq!(item.display_expiration(), "Jul 20, 2025");
        assert_eq!(item.display_obtained(), UNKNOWN_DATE);
    }

    #[test]
    fn is_in_compares_reference() {
        let fridge = LocationId::new();
        let mut item = milk();
        assert!(!item.is_in(&fridge));
        item.location = Some(fridge);
        assert!(item.is_in(&fridge));
    }

    #[test]
    fn builder_sets_fields() {
        let loc = LocationId::new();
        let fields = ItemFields::new(" Eggs ", "12")
            .location(loc)
            .expires(date(2025, 8, 1))
            .obtained(date(2025, 7, 1))
            .notes("free range");
        assert_eq!(fields.trimmed_name(), "Eggs");
        assert_eq!(fields.location, Some(loc));
        assert_eq!(fields.quantity_text, "12");
        assert_eq!(fields.expiration_date, Some(date(2025, 8, 1)));
        assert_eq!(fields.obtained_date, Some(date(2025, 7, 1)));
    }

    #[test]
    fn blank_notes_normalize_to_none() {
        assert_eq!(ItemFields::new("a", "1").notes("  \n").normalized_notes(), None);
        assert_eq!(
            ItemFields::new("a", "1").notes(" keep ").normalized_notes(),
            Some("keep".to_string())
        );
    }

    #[test]
    fn from_item_round_trips_form_values() {
        let item = Item {
            quantity: Quantity::from_hundredths(150).unwrap(),
            ..milk()
        };
        let fields = ItemFields::from_item(&item);
        assert_eq!(fields.quantity_text, "1.5");
        assert_eq!(fields.name, "Milk");
        assert_eq!(fields.expiration_date, item.expiration_date);
    }
}
