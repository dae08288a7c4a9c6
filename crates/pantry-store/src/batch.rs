use pantry_types::{Item, ItemId, Location, LocationId};

/// A single record mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOp {
    /// Insert or replace a location.
    PutLocation(Location),
    /// Remove a location. Removing a missing id is a no-op.
    DeleteLocation(LocationId),
    /// Insert or replace an item.
    PutItem(Item),
    /// Remove an item. Removing a missing id is a no-op.
    DeleteItem(ItemId),
}

/// An ordered set of mutations committed as one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_location(&mut self, location: Location) -> &mut Self {
        self.ops.push(WriteOp::PutLocation(location));
        self
    }

    pub fn delete_location(&mut self, id: LocationId) -> &mut Self {
        self.ops.push(WriteOp::DeleteLocation(id));
        self
    }

    pub fn put_item(&mut self, item: Item) -> &mut Self {
        self.ops.push(WriteOp::PutItem(item));
        self
    }

    pub fn delete_item(&mut self, id: ItemId) -> &mut Self {
        self.ops.push(WriteOp::DeleteItem(id));
        self
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl FromIterator<WriteOp> for WriteBatch {
    fn from_iter<T: IntoIterator<Item = WriteOp>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let loc = Location::custom("Garage");
        let loc_id = loc.id;
        let mut batch = WriteBatch::new();
        batch.put_location(loc.clone()).delete_location(loc_id);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.ops()[0], WriteOp::PutLocation(loc));
        assert_eq!(batch.ops()[1], WriteOp::DeleteLocation(loc_id));
    }

    #[test]
    fn empty_batch() {
        assert!(WriteBatch::new().is_empty());
    }

    #[test]
    fn collect_from_ops() {
        let batch: WriteBatch = vec![WriteOp::DeleteItem(ItemId::new())].into_iter().collect();
        assert_eq!(batch.len(), 1);
    }
}
