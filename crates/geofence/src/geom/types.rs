//! `Point`, `Polygon` and the bounding box used as a cheap pre-filter.

use std::collections::BTreeSet;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::geojson::GeoJsonPolygon;
use crate::cfg::ANTIMERIDIAN_SPAN;
use crate::error::GeofenceError;

/// A position in decimal degrees.
///
/// Invariants: both components finite, longitude in [-180, 180], latitude in [-90, 90].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    lon: f64,
    lat: f64,
}

impl Point {
    /// Validate and build a point.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, GeofenceError> {
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        if !(lon_ok && lat_ok) {
            return Err(GeofenceError::InvalidCoordinate {
                longitude,
                latitude,
            });
        }
        Ok(Self {
            lon: longitude,
            lat: latitude,
        })
    }

    /// Caller guarantees the range invariants (crate-internal constants only).
    pub(crate) const fn new_unchecked(longitude: f64, latitude: f64) -> Self {
        Self {
            lon: longitude,
            lat: latitude,
        }
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.lon
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Planar view `(x, y) = (lon, lat)` used by the containment routines.
    #[inline]
    pub fn as_vec(&self) -> Vector2<f64> {
        Vector2::new(self.lon, self.lat)
    }

    /// Bit-level key with `-0.0` folded onto `0.0`, so coordinate-equal points collide.
    #[inline]
    fn key(&self) -> (u64, u64) {
        ((self.lon + 0.0).to_bits(), (self.lat + 0.0).to_bits())
    }
}

impl TryFrom<[f64; 2]> for Point {
    type Error = GeofenceError;

    fn try_from(value: [f64; 2]) -> Result<Self, Self::Error> {
        Point::new(value[0], value[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.lon, p.lat]
    }
}

/// Axis-aligned bounds of a ring in (lon, lat).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BBox {
    /// Closed-box membership; boundary points count as inside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.min_lon..=self.max_lon).contains(&p.lon)
            && (self.min_lat..=self.max_lat).contains(&p.lat)
    }

    /// Membership in the box grown by `eps` on every side.
    #[inline]
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        (self.min_lon - eps..=self.max_lon + eps).contains(&p.lon)
            && (self.min_lat - eps..=self.max_lat + eps).contains(&p.lat)
    }

    fn of(points: &[Point]) -> Self {
        let mut b = BBox {
            min_lon: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        };
        for p in points {
            b.min_lon = b.min_lon.min(p.lon);
            b.min_lat = b.min_lat.min(p.lat);
            b.max_lon = b.max_lon.max(p.lon);
            b.max_lat = b.max_lat.max(p.lat);
        }
        b
    }
}

/// A single closed outer ring.
///
/// Invariants:
/// - At least 4 points; the first and last are coordinate-equal (closing duplicate).
/// - At least 3 distinct vertices.
/// - Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoJsonPolygon", into = "GeoJsonPolygon")]
pub struct Polygon {
    ring: Vec<Point>,
    bbox: BBox,
}

impl Polygon {
    /// Validate a closed ring.
    pub fn new(points: Vec<Point>) -> Result<Self, GeofenceError> {
        if points.len() < 4 {
            return Err(GeofenceError::polygon(format!(
                "ring needs at least 4 points (including the closing point), got {}",
                points.len()
            )));
        }
        let (first, last) = (points[0], points[points.len() - 1]);
        if first.lon != last.lon || first.lat != last.lat {
            return Err(GeofenceError::polygon(
                "ring is not closed: first and last points differ",
            ));
        }
        let distinct: BTreeSet<_> = points[..points.len() - 1].iter().map(Point::key).collect();
        if distinct.len() < 3 {
            return Err(GeofenceError::polygon(format!(
                "ring needs at least 3 distinct vertices, got {}",
                distinct.len()
            )));
        }
        let bbox = BBox::of(&points);
        Ok(Self { ring: points, bbox })
    }

    /// Caller guarantees the ring invariants (crate-internal constants only).
    pub(crate) fn new_unchecked(points: Vec<Point>) -> Self {
        debug_assert!(Self::new(points.clone()).is_ok(), "invalid built-in ring");
        let bbox = BBox::of(&points);
        Self { ring: points, bbox }
    }

    /// Convenience constructor from `(lon, lat)` pairs; validates every point first.
    pub fn from_lon_lat(coords: &[(f64, f64)]) -> Result<Self, GeofenceError> {
        let points = coords
            .iter()
            .map(|&(lon, lat)| Point::new(lon, lat))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(points)
    }

    /// Full ring, closing point included.
    #[inline]
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    /// Vertices without the closing duplicate.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.ring[..self.ring.len() - 1]
    }

    /// Consecutive edges `(v_i, v_{i+1})` of the closed ring.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.ring.windows(2).map(|w| (w[0], w[1]))
    }

    #[inline]
    pub fn bbox(&self) -> BBox {
        self.bbox
    }

    /// Same ring traversed in the opposite direction.
    pub fn reversed(&self) -> Polygon {
        let mut ring = self.ring.clone();
        ring.reverse();
        Polygon {
            ring,
            bbox: self.bbox,
        }
    }

    /// True if some edge spans more than 180° of longitude, i.e. the ring most likely
    /// wraps across the antimeridian. Planar containment is not meaningful there.
    pub fn crosses_antimeridian(&self) -> bool {
        self.edges()
            .any(|(a, b)| (a.lon - b.lon).abs() > ANTIMERIDIAN_SPAN)
    }
}
