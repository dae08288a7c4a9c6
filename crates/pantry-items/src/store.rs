use std::sync::Arc;

use pantry_store::{PantryStore, WriteBatch};
use pantry_types::{parse_and_validate, Clock, Item, ItemFields, ItemId, LocationId, Quantity};
use tracing::{debug, info};

use crate::error::{ItemError, Result};
use crate::filter::{ItemFilter, ItemListing};

/// Form input that passed validation, ready to be written.
struct Validated {
    name: String,
    location: Option<LocationId>,
    quantity: Quantity,
    notes: Option<String>,
}

/// Creates, edits, deletes and lists inventory items.
#[derive(Clone)]
pub struct ItemStore {
    store: Arc<dyn PantryStore>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore").finish_non_exhaustive()
    }
}

impl ItemStore {
    pub fn new(store: Arc<dyn PantryStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Validate `fields` and store a new item.
    ///
    /// A missing obtained date defaults to today.
    pub fn create(&self, fields: &ItemFields) -> Result<Item> {
        let valid = self.validate(fields)?;
        let item = Item {
            id: ItemId::new(),
            name: valid.name,
            location: valid.location,
            quantity: valid.quantity,
            expiration_date: fields.expiration_date,
            obtained_date: Some(fields.obtained_date.unwrap_or_else(|| self.clock.today())),
            notes: valid.notes,
        };

        let mut batch = WriteBatch::new();
        batch.put_item(item.clone());
        self.store.commit(batch)?;
        info!(id = %item.id, name = %item.name, "created item");
        Ok(item)
    }

    /// Validate `fields` and replace the stored item.
    ///
    /// A missing obtained date keeps the stored one.
    pub fn update(&self, id: &ItemId, fields: &ItemFields) -> Result<Item> {
        let current = self.get(id)?;
        let valid = self.validate(fields)?;
        let item = Item {
            id: current.id,
            name: valid.name,
            location: valid.location,
            quantity: valid.quantity,
            expiration_date: fields.expiration_date,
            obtained_date: fields.obtained_date.or(current.obtained_date),
            notes: valid.notes,
        };

        let mut batch = WriteBatch::new();
        batch.put_item(item.clone());
        self.store.commit(batch)?;
        info!(id = %item.id, name = %item.name, "updated item");
        Ok(item)
    }

    /// Permanently remove an item. Returns the removed record.
    pub fn delete(&self, id: &ItemId) -> Result<Item> {
        let item = self.get(id)?;
        let mut batch = WriteBatch::new();
        batch.delete_item(*id);
        self.store.commit(batch)?;
        info!(id = %id, name = %item.name, "deleted item");
        Ok(item)
    }

    pub fn get(&self, id: &ItemId) -> Result<Item> {
        self.store.item(id)?.ok_or_else(|| ItemError::NotFound {
            id: id.to_string(),
        })
    }

    /// Look up an item by its full id or the tail of it.
    pub fn resolve(&self, reference: &str) -> Result<Item> {
        let mut matches = self
            .store
            .items_where(&|item: &Item| item.id.matches_ref(reference))?;
        match matches.len() {
            0 => Err(ItemError::NotFound {
                id: reference.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            n => Err(ItemError::AmbiguousId {
                reference: reference.to_string(),
                matches: n,
            }),
        }
    }

    /// Items matching `filter`, earliest expiration first.
    pub fn list(&self, filter: ItemFilter) -> Result<ItemListing> {
        let items = self.store.items_where(&|item: &Item| filter.matches(item))?;
        debug!(?filter, count = items.len(), "listed items");
        Ok(ItemListing::new(items))
    }

    pub fn count(&self, filter: ItemFilter) -> Result<usize> {
        Ok(self
            .store
            .items_where(&|item: &Item| filter.matches(item))?
            .len())
    }

    /// Items in `location` whose name equals `name`, ignoring case and
    /// surrounding whitespace.
    pub fn find_duplicates(&self, name: &str, location: Option<LocationId>) -> Result<Vec<Item>> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return Ok(Vec::new());
        }
        let found = self.store.items_where(&|item: &Item| {
            item.location == location && item.name.trim().to_lowercase() == wanted
        })?;
        Ok(ItemListing::new(found).into_vec())
    }

    fn validate(&self, fields: &ItemFields) -> Result<Validated> {
        let name = fields.trimmed_name();
        if name.is_empty() {
            return Err(ItemError::EmptyName);
        }
        let quantity = parse_and_validate(&fields.quantity_text)?;
        if let Some(id) = fields.location {
            let location = self
                .store
                .location(&id)?
                .ok_or(ItemError::UnknownLocation { id })?;
            if location.is_protected {
                return Err(ItemError::AggregateLocation {
                    name: location.name,
                });
            }
        }
        Ok(Validated {
            name: name.to_string(),
            location: fields.location,
            quantity,
            notes: fields.normalized_notes(),
        })
    }
}
