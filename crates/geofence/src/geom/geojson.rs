//! GeoJSON `Polygon` geometry, the on-disk and wire shape of a boundary.
//!
//! Only a single outer ring is accepted; holes are out of scope and rejected rather
//! than silently dropped.

use serde::{Deserialize, Serialize};

use super::types::{Point, Polygon};
use crate::error::GeofenceError;

/// `{"type": "Polygon", "coordinates": [[[lon, lat], ...]]}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonPolygon {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<Point>>,
}

impl TryFrom<GeoJsonPolygon> for Polygon {
    type Error = GeofenceError;

    fn try_from(value: GeoJsonPolygon) -> Result<Self, Self::Error> {
        if value.kind != "Polygon" {
            return Err(GeofenceError::polygon(format!(
                "unsupported geometry type {:?}",
                value.kind
            )));
        }
        let mut rings = value.coordinates.into_iter();
        let outer = rings
            .next()
            .ok_or_else(|| GeofenceError::polygon("geometry has no rings"))?;
        if rings.next().is_some() {
            return Err(GeofenceError::polygon(
                "polygons with holes (more than one ring) are not supported",
            ));
        }
        Polygon::new(outer)
    }
}

impl From<Polygon> for GeoJsonPolygon {
    fn from(p: Polygon) -> Self {
        GeoJsonPolygon {
            kind: "Polygon".to_string(),
            coordinates: vec![p.ring().to_vec()],
        }
    }
}
