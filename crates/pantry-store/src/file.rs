//! JSON-file-backed record store.
//!
//! The whole dataset is one JSON document:
//!
//! ```text
//! {
//!   "format_version": 1,
//!   "locations": [ { "id": ..., "name": "Fridge", ... }, ... ],
//!   "items":     [ { "id": ..., "name": "Milk", "quantity": "1", ... }, ... ]
//! }
//! ```
//!
//! Commits write the post-batch document to a temp file in the same
//! directory, fsync it, and rename it over the data file. The in-memory
//! tables are replaced only after the rename succeeds.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use pantry_types::{Item, ItemId, Location, LocationId};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::batch::WriteBatch;
use crate::error::{StoreError, StoreResult};
use crate::tables::Tables;
use crate::traits::PantryStore;

/// Version written to and expected in the data file.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    format_version: u32,
    #[serde(default)]
    locations: Vec<Location>,
    #[serde(default)]
    items: Vec<Item>,
}

impl StoreDocument {
    fn from_tables(tables: &Tables) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            locations: tables.locations.values().cloned().collect(),
            items: tables.items.values().cloned().collect(),
        }
    }
}

/// A [`PantryStore`] persisted to a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    tables: RwLock<Tables>,
}

impl JsonFileStore {
    /// Open the data file at `path`, or start empty if it does not exist.
    ///
    /// The file is not created until the first commit. A file that cannot be
    /// decoded is reported as [`StoreError::Corrupt`].
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let tables = match fs::read(&path) {
            Ok(bytes) => Self::decode(&path, &bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "data file absent; starting empty");
                Tables::default()
            }
            Err(e) => return Err(e.into()),
        };
        info!(
            path = %path.display(),
            locations = tables.locations.len(),
            items = tables.items.len(),
            "opened data file"
        );
        Ok(Self {
            path,
            tables: RwLock::new(tables),
        })
    }

    /// Path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(path: &Path, bytes: &[u8]) -> StoreResult<Tables> {
        let doc: StoreDocument = serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if doc.format_version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: doc.format_version,
                expected: FORMAT_VERSION,
            });
        }
        let tables = Tables::from_records(doc.locations, doc.items);
        tables.check_references().map_err(|e| StoreError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(tables)
    }

    fn write_document(&self, tables: &Tables) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let tmp = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, &StoreDocument::from_tables(tables))
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl PantryStore for JsonFileStore {
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
        let mut tables = self
            .tables
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;
        let next = tables.with_batch(&batch)?;
        if let Err(e) = self.write_document(&next) {
            warn!(path = %self.path.display(), error = %e, "failed to persist batch");
            return Err(e);
        }
        *tables = next;
        debug!(path = %self.path.display(), ops = batch.len(), "committed batch");
        Ok(())
    }
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish()
    }
}
