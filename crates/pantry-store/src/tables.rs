//! The record tables shared by every backend.

use std::collections::BTreeMap;

use pantry_types::{Item, ItemId, Location, LocationId};

use crate::batch::{WriteBatch, WriteOp};
use crate::error::{StoreError, StoreResult};

/// Locations and items keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tables {
    pub locations: BTreeMap<LocationId, Location>,
    pub items: BTreeMap<ItemId, Item>,
}

impl Tables {
    /// Build tables from record lists, as loaded from a document.
    pub fn from_records(locations: Vec<Location>, items: Vec<Item>) -> Self {
        Self {
            locations: locations.into_iter().map(|l| (l.id, l)).collect(),
            items: items.into_iter().map(|i| (i.id, i)).collect(),
        }
    }

    /// Return a copy of these tables with `batch` applied.
    ///
    /// `self` is left untouched, so a caller can validate or persist the
    /// result before swapping it in.
    pub fn with_batch(&self, batch: &WriteBatch) -> StoreResult<Tables> {
        let mut next = self.clone();
        for op in batch.ops() {
            match op {
                WriteOp::PutLocation(location) => {
                    next.locations.insert(location.id, location.clone());
                }
                WriteOp::DeleteLocation(id) => {
                    next.locations.remove(id);
                }
                WriteOp::PutItem(item) => {
                    next.items.insert(item.id, item.clone());
                }
                WriteOp::DeleteItem(id) => {
                    next.items.remove(id);
                }
            }
        }
        next.check_references()?;
        Ok(next)
    }

    /// Fail if any item references a location that is not present.
    pub fn check_references(&self) -> StoreResult<()> {
        for item in self.items.values() {
            if let Some(location) = item.location {
                if !self.locations.contains_key(&location) {
                    return Err(StoreError::DanglingReference {
                        item: item.id,
                        location,
                    });
                }
            }
        }
        Ok(())
    }
}
