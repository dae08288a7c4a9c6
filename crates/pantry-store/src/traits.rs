use pantry_types::{Item, ItemId, Location, LocationId};

use crate::batch::WriteBatch;
use crate::error::StoreResult;

/// Typed record store backing the registry and the item store.
///
/// All implementations must satisfy these invariants:
/// - `commit` is atomic: on `Err` no op of the batch is visible.
/// - A committed state never holds an item whose `location` is missing.
/// - Reads observe every batch committed before them (single writer).
/// - All I/O errors are propagated, never silently ignored.
pub trait PantryStore: Send + Sync {
    /// Read a location by id. Returns `Ok(None)` if it does not exist.
    fn location(&self, id: &LocationId) -> StoreResult<Option<Location>>;

    /// All locations, in no particular order.
    fn locations(&self) -> StoreResult<Vec<Location>>;

    /// Read an item by id. Returns `Ok(None)` if it does not exist.
    fn item(&self, id: &ItemId) -> StoreResult<Option<Item>>;

    /// All items, in no particular order.
    fn items(&self) -> StoreResult<Vec<Item>>;

    /// Apply every op of `batch`, or none of them.
    fn commit(&self, batch: WriteBatch) -> StoreResult<()>;

    /// Number of stored locations.
    fn location_count(&self) -> StoreResult<usize> {
        Ok(self.locations()?.len())
    }

    /// Items matching `predicate`.
    ///
    /// Default implementation filters [`items`](Self::items). Backends with
    /// an index may override.
    fn items_where(&self, predicate: &dyn Fn(&Item) -> bool) -> StoreResult<Vec<Item>> {
        Ok(self.items()?.into_iter().filter(|i| predicate(i)).collect())
    }
}
