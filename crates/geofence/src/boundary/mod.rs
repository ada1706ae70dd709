//! Boundaries and the store port they are fetched through.
//!
//! The core never reaches for storage itself: a `BoundaryStore` handle is injected into
//! the composing layer (`service::AttendanceService`), which looks the boundary up and
//! lends it to `verify` for a single call.
//!
//! Adapters
//! - `MemoryStore`: in-process map, used by tests and embedding callers.
//! - `JsonFileStore`: one JSON document on disk, GeoJSON geometry per boundary.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geom::Polygon;

/// Stable boundary identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryId(String);

impl BoundaryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random (UUID v4) identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoundaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named polygonal geofence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub id: BoundaryId,
    pub name: String,
    #[serde(rename = "boundary")]
    pub polygon: Polygon,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store document {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored boundary {id} in {path} is invalid: {source}")]
    InvalidRecord {
        path: PathBuf,
        id: BoundaryId,
        #[source]
        source: serde_json::Error,
    },

    #[error("store lock poisoned")]
    Poisoned,
}

/// Lookup contract consumed by the attendance service.
pub trait BoundaryStore: Send + Sync {
    /// `Ok(None)` when no boundary has this id.
    fn get(&self, id: &BoundaryId) -> Result<Option<Boundary>, StoreError>;

    /// Store a new boundary under a freshly generated id.
    fn insert(&self, name: &str, polygon: Polygon) -> Result<BoundaryId, StoreError>;

    /// All boundaries, ordered by id.
    fn list(&self) -> Result<Vec<Boundary>, StoreError>;
}
