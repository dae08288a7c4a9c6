use std::cmp::Ordering;
use std::sync::Arc;

use pantry_store::{PantryStore, WriteBatch};
use pantry_types::{Item, Location, LocationId, DEFAULT_LOCATIONS};
use tracing::{debug, info};

use crate::error::{RegistryError, Result};
use crate::names::validate_location_name;

/// Owns the set of storage locations.
#[derive(Clone)]
pub struct LocationRegistry {
    store: Arc<dyn PantryStore>,
}

impl std::fmt::Debug for LocationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationRegistry").finish_non_exhaustive()
    }
}

impl LocationRegistry {
    pub fn new(store: Arc<dyn PantryStore>) -> Self {
        Self { store }
    }

    /// Create the default locations if the store has none.
    ///
    /// Returns how many locations were created: four on an empty store,
    /// zero afterwards. Safe to call on every start.
    pub fn seed_defaults(&self) -> Result<usize> {
        if self.store.location_count()? > 0 {
            debug!("locations present; skipping seed");
            return Ok(0);
        }
        let mut batch = WriteBatch::new();
        for (name, is_protected) in DEFAULT_LOCATIONS {
            batch.put_location(Location::seeded(name, is_protected));
        }
        let created = batch.len();
        self.store.commit(batch)?;
        info!(created, "seeded default locations");
        Ok(created)
    }

    /// All locations in display order: "All" first, then by name.
    pub fn list(&self) -> Result<Vec<Location>> {
        let mut locations = self.store.locations()?;
        sort_for_display(&mut locations);
        Ok(locations)
    }

    /// Locations an item may be filed under (everything except "All").
    pub fn assignable(&self) -> Result<Vec<Location>> {
        let mut locations = self.list()?;
        locations.retain(|l| !l.is_protected);
        Ok(locations)
    }

    pub fn get(&self, id: &LocationId) -> Result<Location> {
        self.store
            .location(id)?
            .ok_or(RegistryError::NotFound { id: *id })
    }

    /// Case-insensitive lookup by name.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Location>> {
        let name = name.trim();
        Ok(self.store.locations()?.into_iter().find(|l| l.has_name(name)))
    }

    /// Create a custom location.
    pub fn create(&self, name: &str) -> Result<Location> {
        let existing = self.store.locations()?;
        let name = validate_location_name(name, &existing, None)?;
        let location = Location::custom(name);

        let mut batch = WriteBatch::new();
        batch.put_location(location.clone());
        self.store.commit(batch)?;
        info!(id = %location.id, name = %location.name, "created location");
        Ok(location)
    }

    /// Rename a location. Items follow automatically since they hold the id.
    pub fn rename(&self, id: &LocationId, new_name: &str) -> Result<Location> {
        let existing = self.store.locations()?;
        let current = existing
            .iter()
            .find(|l| &l.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound { id: *id })?;
        if current.is_protected {
            return Err(RegistryError::Protected { name: current.name });
        }
        let name = validate_location_name(new_name, &existing, Some(id))?;

        let renamed = Location { name, ..current };
        let mut batch = WriteBatch::new();
        batch.put_location(renamed.clone());
        self.store.commit(batch)?;
        info!(id = %renamed.id, name = %renamed.name, "renamed location");
        Ok(renamed)
    }

    /// Delete a location, clearing it from every item filed under it.
    ///
    /// Returns the number of items that became uncategorized.
    pub fn delete(&self, id: &LocationId) -> Result<usize> {
        let location = self.get(id)?;
        if location.is_protected {
            return Err(RegistryError::Protected {
                name: location.name,
            });
        }

        let affected = self.store.items_where(&|item: &Item| item.is_in(id))?;
        let mut batch = WriteBatch::new();
        for item in &affected {
            batch.put_item(Item {
                location: None,
                ..item.clone()
            });
        }
        batch.delete_location(*id);
        self.store.commit(batch)?;

        info!(
            id = %id,
            name = %location.name,
            detached = affected.len(),
            "deleted location"
        );
        Ok(affected.len())
    }

    /// Total number of locations, including "All".
    pub fn count(&self) -> Result<usize> {
        Ok(self.store.location_count()?)
    }

    /// Number of locations other than "All", for enforcing a cap.
    pub fn assignable_count(&self) -> Result<usize> {
        Ok(self
            .store
            .locations()?
            .iter()
            .filter(|l| !l.is_protected)
            .count())
    }
}

/// Sort protected locations first, then by name using ordinal comparison.
pub fn sort_for_display(locations: &mut [Location]) {
    locations.sort_by(|a, b| match (a.is_protected, b.is_protected) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_store::{InMemoryPantryStore, StoreError};
    use pantry_types::{ErrorKind, ItemId, Quantity, ALL_LOCATION};

    fn setup() -> (Arc<InMemoryPantryStore>, LocationRegistry) {
        let store = Arc::new(InMemoryPantryStore::new());
        let registry = LocationRegistry::new(store.clone());
        registry.seed_defaults().unwrap();
        (store, registry)
    }

    fn names(locations: &[Location]) -> Vec<&str> {
        locations.iter().map(|l| l.name.as_str()).collect()
    }

    fn file_item(store: &InMemoryPantryStore, name: &str, location: LocationId) -> Item {
        let item = Item {
            id: ItemId::new(),
            name: name.into(),
            location: Some(location),
            quantity: Quantity::ONE,
            expiration_date: None,
            obtained_date: None,
            notes: None,
        };
        let mut batch = WriteBatch::new();
        batch.put_item(item.clone());
        store.commit(batch).unwrap();
        item
    }

    // ---- Seeding ----

    #[test]
    fn seed_creates_four_defaults() {
        let (_, registry) = setup();
        let locations = registry.list().unwrap();
        assert_eq!(names(&locations), vec!["All", "Freezer", "Fridge", "Pantry"]);
        assert!(locations.iter().all(|l| l.is_default));

        let all = &locations[0];
        assert!(all.is_protected);
        assert!(locations[1..].iter().all(|l| !l.is_protected));
    }

    #[test]
    fn seed_is_idempotent() {
        let (_, registry) = setup();
        let before = registry.list().unwrap();
        assert_eq!(registry.seed_defaults().unwrap(), 0);
        assert_eq!(registry.list().unwrap(), before);
    }

    #[test]
    fn seed_skips_non_empty_store() {
        let store = Arc::new(InMemoryPantryStore::new());
        let registry = LocationRegistry::new(store);
        let mut batch = WriteBatch::new();
        batch.put_location(Location::custom("Shed"));
        registry.store.commit(batch).unwrap();

        assert_eq!(registry.seed_defaults().unwrap(), 0);
        assert_eq!(registry.count().unwrap(), 1);
    }

    // ---- Create ----

    #[test]
    fn create_custom_location() {
        let (_, registry) = setup();
        let garage = registry.create("  Garage ").unwrap();
        assert_eq!(garage.name, "Garage");
        assert!(!garage.is_default);
        assert!(!garage.is_protected);
        assert_eq!(registry.count().unwrap(), 5);
    }

    #[test]
    fn create_twice_fails_in_any_case() {
        let (_, registry) = setup();
        registry.create("Garage").unwrap();
        for again in ["Garage", "garage", "GARAGE"] {
            let err = registry.create(again).unwrap_err();
            assert!(matches!(err, RegistryError::DuplicateName { .. }));
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn create_rejects_reserved_and_empty() {
        let (_, registry) = setup();
        assert_eq!(registry.create("all").unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(registry.create(" ").unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(registry.count().unwrap(), 4);
    }

    // ---- Rename ----

    #[test]
    fn rename_all_is_protected() {
        let (_, registry) = setup();
        let all = registry.find_by_name(ALL_LOCATION).unwrap().unwrap();
        for new_name in ["Anything", "", "Fridge"] {
            let err = registry.rename(&all.id, new_name).unwrap_err();
            assert!(matches!(err, RegistryError::Protected { .. }));
            assert_eq!(err.kind(), ErrorKind::Protected);
        }
        assert_eq!(registry.get(&all.id).unwrap().name, "All");
    }

    #[test]
    fn rename_updates_name_seen_by_items() {
        let (store, registry) = setup();
        let fridge = registry.find_by_name("fridge").unwrap().unwrap();
        let milk = file_item(&store, "Milk", fridge.id);

        registry.rename(&fridge.id, "Cooler").unwrap();

        let stored = store.item(&milk.id).unwrap().unwrap();
        assert_eq!(stored, milk);
        let location = registry.get(&stored.location.unwrap()).unwrap();
        assert_eq!(location.name, "Cooler");
        assert!(location.is_default);
    }

    #[test]
    fn rename_to_own_name_in_other_case() {
        let (_, registry) = setup();
        let pantry = registry.find_by_name("Pantry").unwrap().unwrap();
        let renamed = registry.rename(&pantry.id, "PANTRY").unwrap();
        assert_eq!(renamed.name, "PANTRY");
    }

    #[test]
    fn rename_collision_and_reserved() {
        let (_, registry) = setup();
        let pantry = registry.find_by_name("Pantry").unwrap().unwrap();
        assert!(matches!(
            registry.rename(&pantry.id, "freezer").unwrap_err(),
            RegistryError::DuplicateName { .. }
        ));
        assert!(matches!(
            registry.rename(&pantry.id, "All").unwrap_err(),
            RegistryError::ReservedName { .. }
        ));
        assert!(matches!(
            registry.rename(&pantry.id, "   ").unwrap_err(),
            RegistryError::EmptyName
        ));
    }

    #[test]
    fn rename_unknown_is_not_found() {
        let (_, registry) = setup();
        let err = registry.rename(&LocationId::new(), "X").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    // ---- Delete ----

    #[test]
    fn delete_all_is_protected() {
        let (_, registry) = setup();
        let before = registry.list().unwrap();
        let all = registry.find_by_name("All").unwrap().unwrap();
        let err = registry.delete(&all.id).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protected);
        assert_eq!(registry.list().unwrap(), before);
    }

    #[test]
    fn delete_detaches_referencing_items() {
        let (store, registry) = setup();
        let fridge = registry.find_by_name("Fridge").unwrap().unwrap();
        let pantry = registry.find_by_name("Pantry").unwrap().unwrap();
        let milk = file_item(&store, "Milk", fridge.id);
        let cheese = file_item(&store, "Cheese", fridge.id);
        let rice = file_item(&store, "Rice", pantry.id);

        assert_eq!(registry.delete(&fridge.id).unwrap(), 2);

        assert!(registry.find_by_name("Fridge").unwrap().is_none());
        assert_eq!(store.item(&milk.id).unwrap().unwrap().location, None);
        assert_eq!(store.item(&cheese.id).unwrap().unwrap().location, None);
        assert_eq!(
            store.item(&rice.id).unwrap().unwrap().location,
            Some(pantry.id)
        );
        assert!(store
            .items()
            .unwrap()
            .iter()
            .all(|i| i.location != Some(fridge.id)));
    }

    #[test]
    fn delete_failure_leaves_state_intact() {
        let (store, registry) = setup();
        let fridge = registry.find_by_name("Fridge").unwrap().unwrap();
        let milk = file_item(&store, "Milk", fridge.id);
        let before = store.snapshot().unwrap();

        store.set_read_only(true);
        let err = registry.delete(&fridge.id).unwrap_err();
        assert!(matches!(err, RegistryError::Store(StoreError::ReadOnly)));
        assert_eq!(err.kind(), ErrorKind::Persistence);
        assert_eq!(store.snapshot().unwrap(), before);
        assert_eq!(
            store.item(&milk.id).unwrap().unwrap().location,
            Some(fridge.id)
        );
    }

    // ---- Ordering & counts ----

    #[test]
    fn display_order_interleaves_custom_locations() {
        let (_, registry) = setup();
        registry.create("Garage").unwrap();
        registry.create("Basement").unwrap();
        registry.create("cupboard").unwrap();
        let locations = registry.list().unwrap();
        assert_eq!(
            names(&locations),
            vec!["All", "Basement", "Freezer", "Fridge", "Garage", "Pantry", "cupboard"]
        );
    }

    #[test]
    fn assignable_excludes_all() {
        let (_, registry) = setup();
        registry.create("Garage").unwrap();
        assert_eq!(registry.assignable_count().unwrap(), 4);
        assert!(registry.assignable().unwrap().iter().all(|l| !l.is_protected));
    }
}
