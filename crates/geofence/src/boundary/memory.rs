use std::collections::BTreeMap;
use std::sync::RwLock;

use super::{Boundary, BoundaryId, BoundaryStore, StoreError};
use crate::geom::Polygon;

/// In-process boundary map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<BTreeMap<BoundaryId, Boundary>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a boundary under its own id.
    pub fn put(&self, boundary: Boundary) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.insert(boundary.id.clone(), boundary);
        Ok(())
    }
}

impl FromIterator<Boundary> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Boundary>>(iter: I) -> Self {
        let map = iter.into_iter().map(|b| (b.id.clone(), b)).collect();
        Self {
            inner: RwLock::new(map),
        }
    }
}

impl BoundaryStore for MemoryStore {
    fn get(&self, id: &BoundaryId) -> Result<Option<Boundary>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(id).cloned())
    }

    fn insert(&self, name: &str, polygon: Polygon) -> Result<BoundaryId, StoreError> {
        let id = BoundaryId::generate();
        self.put(Boundary {
            id: id.clone(),
            name: name.to_string(),
            polygon,
        })?;
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Boundary>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.values().cloned().collect())
    }
}
