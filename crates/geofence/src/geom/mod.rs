//! Geofence geometry model: validated points and closed polygon rings.
//!
//! Purpose
//! - `Point` and `Polygon` are immutable value types; construction is the only place
//!   their invariants are checked, so downstream code (containment, verification) can
//!   rely on them without re-validating.
//! - Coordinates are always (longitude, latitude) in decimal degrees, the GeoJSON order.
//!
//! Code cross-refs: `contain::contains`, `verify::verify`, `geojson::GeoJsonPolygon`

pub mod geojson;
mod types;

pub use geojson::GeoJsonPolygon;
pub use types::{BBox, Point, Polygon};
