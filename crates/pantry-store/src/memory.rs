//! In-memory record store for tests and ephemeral use.
//!
//! [`InMemoryPantryStore`] keeps its [`Tables`] behind a `RwLock`. Data is
//! lost when the store is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use pantry_types::{Item, ItemId, Location, LocationId};
use tracing::{debug, warn};

use crate::batch::WriteBatch;
use crate::error::{StoreError, StoreResult};
use crate::tables::Tables;
use crate::traits::PantryStore;

/// An in-memory implementation of [`PantryStore`].
pub struct InMemoryPantryStore {
    tables: RwLock<Tables>,
    read_only: AtomicBool,
}

impl InMemoryPantryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::from_tables(Tables::default())
    }

    /// Create a store holding `tables`.
    pub fn from_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
            read_only: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `commit` fail with [`StoreError::ReadOnly`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// A copy of the current tables.
    pub fn snapshot(&self) -> StoreResult<Tables> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryPantryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PantryStore for InMemoryPantryStore {
    fn location(&self, id: &LocationId) -> StoreResult<Option<Location>> {
        Ok(self.read()?.locations.get(id).cloned())
    }

    fn locations(&self) -> StoreResult<Vec<Location>> {
        Ok(self.read()?.locations.values().cloned().collect())
    }

    fn item(&self, id: &ItemId) -> StoreResult<Option<Item>> {
        Ok(self.read()?.items.get(id).cloned())
    }

    fn items(&self) -> StoreResult<Vec<Item>> {
        Ok(self.read()?.items.values().cloned().collect())
    }

    fn location_count(&self) -> StoreResult<usize> {
        Ok(self.read()?.locations.len())
    }

    fn commit(&self, batch: WriteBatch) -> StoreResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            warn!(ops = batch.len(), "rejecting batch on read-only store");
            return Err(StoreError::ReadOnly);
        }
        let mut tables = self
            .tables
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        let next = tables.with_batch(&batch)?;
        *tables = next;
        debug!(ops = batch.len(), "committed batch");
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryPantryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("InMemoryPantryStore");
        if let Ok(tables) = self.tables.read() {
            s.field("locations", &tables.locations.len())
                .field("items", &tables.items.len());
        }
        s.field("read_only", &self.read_only.load(Ordering::SeqCst))
            .finish()
    }
}
