//! Curated surface for embedding callers (transport layers, bindings).
//!
//! Prefer these re-exports over reaching into submodules; internal layout may move.

// Geometry
pub use crate::geom::{BBox, GeoJsonPolygon, Point, Polygon};
// Containment and verification
pub use crate::contain::{contains, is_acceptable, on_segment, Containment, RayCast};
pub use crate::verify::{verify, verify_with, Reading, Reason, Verdict};
// Composition
pub use crate::boundary::{
    Boundary, BoundaryId, BoundaryStore, JsonFileStore, MemoryStore, StoreError,
};
pub use crate::cfg::{GateCfg, DEFAULT_MAX_ACCURACY_M};
pub use crate::error::GeofenceError;
pub use crate::sample::{sample_classroom, sample_polygon};
pub use crate::service::{AttendanceService, CheckError, CheckRequest};
