use std::cmp::Ordering;

use pantry_types::{Item, Location, LocationId};

/// Which items a listing includes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ItemFilter {
    /// Every item, the "All" tab.
    #[default]
    All,
    /// Items filed under one location.
    Location(LocationId),
    /// Items with no location.
    Uncategorized,
}

impl ItemFilter {
    /// The filter for a location tab. The protected "All" tab shows
    /// everything.
    pub fn for_location(location: &Location) -> Self {
        if location.is_protected {
            Self::All
        } else {
            Self::Location(location.id)
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Location(id) => item.is_in(id),
            Self::Uncategorized => item.location.is_none(),
        }
    }
}

/// Listing order: earliest expiration first, undated items last, then by
/// name ignoring case, then by id so the order is total.
pub fn listing_order(a: &Item, b: &Item) -> Ordering {
    let by_date = match (a.expiration_date, b.expiration_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.id.cmp(&b.id))
}

/// A sorted snapshot of items.
///
/// The snapshot is taken when the listing is built; iterate it as many
/// times as needed. Build a new listing to observe later writes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemListing {
    items: Vec<Item>,
}

impl ItemListing {
    /// Sort `items` into listing order.
    pub fn new(mut items: Vec<Item>) -> Self {
        items.sort_by(listing_order);
        Self { items }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Item> {
        self.items
    }
}

impl<'a> IntoIterator for &'a ItemListing {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for ItemListing {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pantry_types::{ItemId, Quantity, ALL_LOCATION};

    fn item(name: &str, expires: Option<(i32, u32, u32)>) -> Item {
        Item {
            id: ItemId::new(),
            name: name.into(),
            location: None,
            quantity: Quantity::ONE,
            expiration_date: expires.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            obtained_date: None,
            notes: None,
        }
    }

    fn names(listing: &ItemListing) -> Vec<&str> {
        listing.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn sorted_by_expiration_with_undated_last() {
        let listing = ItemListing::new(vec![
            item("Rice", None),
            item("Yogurt", Some((2025, 7, 25))),
            item("Milk", Some((2025, 7, 20))),
            item("Beans", None),
        ]);
        assert_eq!(names(&listing), vec!["Milk", "Yogurt", "Beans", "Rice"]);
    }

    #[test]
    fn same_date_sorted_by_name_ignoring_case() {
        let listing = ItemListing::new(vec![
            item("eggs", Some((2025, 7, 20))),
            item("Bacon", Some((2025, 7, 20))),
            item("Cream", Some((2025, 7, 20))),
        ]);
        assert_eq!(names(&listing), vec!["Bacon", "Cream", "eggs"]);
    }

    #[test]
    fn listing_is_restartable() {
        let listing = ItemListing::new(vec![item("A", None), item("B", None)]);
        let first: Vec<_> = listing.iter().collect();
        let second: Vec<_> = (&listing).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(listing.len(), 2);
    }

    #[test]
    fn filter_matches() {
        let fridge = LocationId::new();
        let mut milk = item("Milk", None);
        milk.location = Some(fridge);
        let loose = item("Loose", None);

        assert!(ItemFilter::All.matches(&milk));
        assert!(ItemFilter::Location(fridge).matches(&milk));
        assert!(!ItemFilter::Location(fridge).matches(&loose));
        assert!(ItemFilter::Uncategorized.matches(&loose));
        assert!(!ItemFilter::Uncategorized.matches(&milk));
    }

    #[test]
    fn all_tab_maps_to_all_filter() {
        let all = Location::seeded(ALL_LOCATION, true);
        let fridge = Location::seeded("Fridge", false);
        assert_eq!(ItemFilter::for_location(&all), ItemFilter::All);
        assert_eq!(ItemFilter::for_location(&fridge), ItemFilter::Location(fridge.id));
    }
}
