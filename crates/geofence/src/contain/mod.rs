//! Containment engine: accuracy gate and ring membership.
//!
//! - `is_acceptable`: cheap measurement-quality gate, evaluated before any geometry.
//! - `contains`: planar ray casting on (lon, lat) with an inclusive boundary.
//! - `Containment`: seam over the membership routine so callers (and tests) can swap
//!   or instrument it without touching `verify`.
//!
//! Code cross-refs: `geom::{Point, Polygon}`, `verify::verify_with`

mod gate;
mod ray;

pub use gate::is_acceptable;
pub use ray::{contains, on_segment};

use crate::geom::{Point, Polygon};

/// Ring-membership strategy used by `verify_with`.
pub trait Containment {
    fn contains(&self, polygon: &Polygon, point: Point) -> bool;
}

/// Default strategy: `contains` (ray casting, boundary counts as inside).
#[derive(Clone, Copy, Debug, Default)]
pub struct RayCast;

impl Containment for RayCast {
    #[inline]
    fn contains(&self, polygon: &Polygon, point: Point) -> bool {
        contains(polygon, point)
    }
}

#[cfg(test)]
mod tests;
