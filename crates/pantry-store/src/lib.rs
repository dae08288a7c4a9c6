//! Record storage for Pantry.
//!
//! This crate is the seam between the domain rules (registry, item store)
//! and whatever engine actually keeps the records. It knows nothing about
//! name uniqueness or protected locations; it stores typed records and
//! applies write batches atomically.
//!
//! # Storage Backends
//!
//! All backends implement the [`PantryStore`] trait:
//!
//! - [`InMemoryPantryStore`] -- `BTreeMap` tables for tests and embedding
//! - [`JsonFileStore`] -- the same tables persisted as one JSON document
//!
//! # Design Rules
//!
//! 1. A [`WriteBatch`] is all-or-nothing: after `commit` either every op is
//!    visible or none is.
//! 2. An item never references a location that is not in the store. A batch
//!    that would leave such a reference is rejected as a whole.
//! 3. All I/O errors are propagated, never silently ignored.

pub mod batch;
pub mod error;
pub mod file;
pub mod memory;
pub mod tables;
pub mod traits;

pub use batch::{WriteBatch, WriteOp};
pub use error::{StoreError, StoreResult};
pub use file::{JsonFileStore, FORMAT_VERSION};
pub use memory::InMemoryPantryStore;
pub use tables::Tables;
pub use traits::PantryStore;
