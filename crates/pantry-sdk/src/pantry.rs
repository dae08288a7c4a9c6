use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use pantry_expiry::{classify, days_until, ExpirationStatus, ExpirySummary};
use pantry_items::{ItemFilter, ItemListing, ItemStore};
use pantry_registry::LocationRegistry;
use pantry_store::{InMemoryPantryStore, JsonFileStore, PantryStore};
use pantry_types::{
    Clock, Item, ItemFields, ItemId, Location, LocationId, SystemClock, MAX_CUSTOM_LOCATIONS,
    UNCATEGORIZED,
};
use tracing::{debug, info};

use crate::error::{SdkError, SdkResult};
use crate::row::ItemRow;
use crate::settings::Settings;

/// High-level Pantry API.
pub struct Pantry {
    store: Arc<dyn PantryStore>,
    registry: LocationRegistry,
    items: ItemStore,
    clock: Arc<dyn Clock>,
    settings: Settings,
}

impl Pantry {
    /// Open a pantry over `store`, seeding the default locations if the
    /// store has none.
    pub fn open(store: Arc<dyn PantryStore>, settings: Settings) -> SdkResult<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let registry = LocationRegistry::new(store.clone());
        let seeded = registry.seed_defaults()?;
        if seeded > 0 {
            info!(seeded, "initialized new pantry");
        }
        Ok(Self {
            items: ItemStore::new(store.clone(), clock.clone()),
            store,
            registry,
            clock,
            settings,
        })
    }

    /// An empty pantry that lives only in memory.
    pub fn in_memory() -> SdkResult<Self> {
        Self::open(Arc::new(InMemoryPantryStore::new()), Settings::default())
    }

    /// Open or create a pantry backed by a JSON file.
    pub fn open_file(path: impl AsRef<Path>, settings: Settings) -> SdkResult<Self> {
        let store = JsonFileStore::open(path)?;
        Self::open(Arc::new(store), settings)
    }

    /// Replace the source of "today".
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.items = ItemStore::new(self.store.clone(), clock.clone());
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ---- Settings ----

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        debug!(?settings, "settings replaced");
        self.settings = settings;
    }

    // ---- Locations ----

    /// All locations, "All" first.
    pub fn locations(&self) -> SdkResult<Vec<Location>> {
        Ok(self.registry.list()?)
    }

    /// Locations an item can be filed under.
    pub fn assignable_locations(&self) -> SdkResult<Vec<Location>> {
        Ok(self.registry.assignable()?)
    }

    pub fn location(&self, id: &LocationId) -> SdkResult<Location> {
        Ok(self.registry.get(id)?)
    }

    /// Case-insensitive lookup by name.
    pub fn find_location(&self, name: &str) -> SdkResult<Location> {
        self.registry
            .find_by_name(name)?
            .ok_or_else(|| SdkError::LocationNotFound(name.trim().to_string()))
    }

    /// Whether another location fits under [`MAX_CUSTOM_LOCATIONS`].
    ///
    /// The cap is advisory; [`create_location`](Self::create_location)
    /// does not check it.
    pub fn can_add_location(&self) -> SdkResult<bool> {
        Ok(self.registry.assignable_count()? < MAX_CUSTOM_LOCATIONS)
    }

    pub fn create_location(&self, name: &str) -> SdkResult<Location> {
        Ok(self.registry.create(name)?)
    }

    pub fn rename_location(&self, id: &LocationId, new_name: &str) -> SdkResult<Location> {
        Ok(self.registry.rename(id, new_name)?)
    }

    /// Delete a location. Items filed there become uncategorized; the
    /// number of such items is returned.
    pub fn delete_location(&self, id: &LocationId) -> SdkResult<usize> {
        Ok(self.registry.delete(id)?)
    }

    // ---- Items ----

    pub fn items(&self, filter: ItemFilter) -> SdkResult<ItemListing> {
        Ok(self.items.list(filter)?)
    }

    pub fn item(&self, id: &ItemId) -> SdkResult<Item> {
        Ok(self.items.get(id)?)
    }

    /// Look up an item by full id or short id.
    pub fn resolve_item(&self, reference: &str) -> SdkResult<Item> {
        Ok(self.items.resolve(reference)?)
    }

    pub fn add_item(&self, fields: &ItemFields) -> SdkResult<Item> {
        Ok(self.items.create(fields)?)
    }

    pub fn update_item(&self, id: &ItemId, fields: &ItemFields) -> SdkResult<Item> {
        Ok(self.items.update(id, fields)?)
    }

    pub fn delete_item(&self, id: &ItemId) -> SdkResult<Item> {
        Ok(self.items.delete(id)?)
    }

    /// Existing items that `fields` would duplicate.
    ///
    /// Always empty when duplicate prompts are suppressed.
    pub fn duplicate_warning(&self, fields: &ItemFields) -> SdkResult<Vec<Item>> {
        if self.settings.suppress_duplicate_prompts {
            return Ok(Vec::new());
        }
        Ok(self.items.find_duplicates(&fields.name, fields.location)?)
    }

    // ---- Expiration ----

    /// Status of `item` as of today, using the configured threshold.
    pub fn status(&self, item: &Item) -> ExpirationStatus {
        classify(
            item.expiration_date,
            self.clock.today(),
            self.settings.threshold(),
        )
    }

    pub fn summary(&self, filter: ItemFilter) -> SdkResult<ExpirySummary> {
        let listing = self.items.list(filter)?;
        Ok(listing.iter().map(|item| self.status(item)).collect())
    }

    /// Banner text for a list, or `None` when the banner is turned off or
    /// nothing needs attention.
    pub fn banner(&self, filter: ItemFilter) -> SdkResult<Option<String>> {
        if !self.settings.show_status_banner {
            return Ok(None);
        }
        Ok(self.summary(filter)?.banner())
    }

    /// List rows for `filter`, in listing order.
    pub fn rows(&self, filter: ItemFilter) -> SdkResult<Vec<ItemRow>> {
        let names: HashMap<LocationId, String> = self
            .registry
            .list()?
            .into_iter()
            .map(|l| (l.id, l.name))
            .collect();
        let today = self.clock.today();
        let highlights = self.settings.highlight_config();

        let rows = self
            .items
            .list(filter)?
            .into_iter()
            .map(|item| {
                let status = self.status(&item);
                ItemRow {
                    id: item.id,
                    short_id: item.id.short_id(),
                    name: item.display_name().to_string(),
                    location: item
                        .location
                        .and_then(|id| names.get(&id).cloned())
                        .unwrap_or_else(|| UNCATEGORIZED.to_string()),
                    quantity: item.quantity.to_string(),
                    expiration: item.display_expiration(),
                    status,
                    days_left: item.expiration_date.map(|d| days_until(d, today)),
                    highlight: highlights.highlight(status),
                    obtained: self
                        .settings
                        .show_obtained_date
                        .then(|| item.display_obtained()),
                    notes: item.notes,
                }
            })
            .collect();
        Ok(rows)
    }
}

impl std::fmt::Debug for Pantry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pantry")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
