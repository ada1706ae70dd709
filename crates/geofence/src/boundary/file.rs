//! JSON-document boundary store.
//!
//! Layout: `{"classrooms": [{"id": .., "name": .., "boundary": <GeoJSON Polygon>}, ..]}`.
//! Geometry is validated per record when it is read, so one bad record only fails
//! lookups of that record. Inserts hold an advisory lock on `<path>.lock` for the whole
//! load-modify-save cycle and replace the document through a unique temp file and rename.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::{Boundary, BoundaryId, BoundaryStore, StoreError};
use crate::geom::Polygon;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    classrooms: Vec<Record>,
}

/// Stored record with its geometry kept raw until it is needed.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    id: BoundaryId,
    name: String,
    boundary: serde_json::Value,
}

/// Boundary store backed by a single JSON file. A missing file is an empty store.
///
/// Any number of handles and processes may share one path.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn malformed(&self, source: serde_json::Error) -> StoreError {
        StoreError::Malformed {
            path: self.path.clone(),
            source,
        }
    }

    fn parent_dir(&self) -> Result<PathBuf, StoreError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| self.io_err(e))?;
        Ok(parent)
    }

    /// Exclusive advisory lock, released when the returned file is dropped.
    fn lock(&self) -> Result<File, StoreError> {
        self.parent_dir()?;
        let mut lock_path = self.path.clone().into_os_string();
        lock_path.push(".lock");
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(PathBuf::from(lock_path))
            .map_err(|e| self.io_err(e))?;
        file.lock_exclusive().map_err(|e| self.io_err(e))?;
        Ok(file)
    }

    fn load(&self) -> Result<Document, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::default()),
            Err(e) => return Err(self.io_err(e)),
        };
        serde_json::from_slice(&bytes).map_err(|e| self.malformed(e))
    }

    fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(doc).map_err(|e| self.malformed(e))?;
        let mut tmp = NamedTempFile::new_in(self.parent_dir()?).map_err(|e| self.io_err(e))?;
        tmp.write_all(&bytes).map_err(|e| self.io_err(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_err(e.error))?;
        Ok(())
    }

    fn decode(&self, record: Record) -> Result<Boundary, StoreError> {
        let polygon: Polygon =
            serde_json::from_value(record.boundary).map_err(|source| StoreError::InvalidRecord {
                path: self.path.clone(),
                id: record.id.clone(),
                source,
            })?;
        Ok(Boundary {
            id: record.id,
            name: record.name,
            polygon,
        })
    }
}

impl BoundaryStore for JsonFileStore {
    fn get(&self, id: &BoundaryId) -> Result<Option<Boundary>, StoreError> {
        let doc = self.load()?;
        tracing::debug!(path = %self.path.display(), id = %id, "boundary_lookup");
        doc.classrooms
            .into_iter()
            .find(|r| &r.id == id)
            .map(|r| self.decode(r))
            .transpose()
    }

    fn insert(&self, name: &str, polygon: Polygon) -> Result<BoundaryId, StoreError> {
        let boundary = serde_json::to_value(&polygon).map_err(|e| self.malformed(e))?;
        let _lock = self.lock()?;
        let mut doc = self.load()?;
        let id = BoundaryId::generate();
        doc.classrooms.push(Record {
            id: id.clone(),
            name: name.to_string(),
            boundary,
        });
        self.save(&doc)?;
        tracing::info!(path = %self.path.display(), id = %id, name, "boundary_saved");
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Boundary>, StoreError> {
        let mut all = self
            .load()?
            .classrooms
            .into_iter()
            .map(|r| self.decode(r))
            .collect::<Result<Vec<_>, _>>()?;
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }
}
