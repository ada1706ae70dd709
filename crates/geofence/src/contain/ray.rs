//! Planar ray casting over (lon, lat).
//!
//! The ray leaves the test point toward +∞ longitude. An edge crosses it when its
//! latitude span straddles the point's latitude under the half-open rule
//! `lo.lat <= p.lat < hi.lat`, and the edge's longitude at that latitude lies strictly
//! east of the point. Points on the ring are caught beforehand by `on_segment`.
//!
//! Both predicates order each edge's endpoints canonically before doing arithmetic, so
//! the result is bit-for-bit the same for either winding direction.

use nalgebra::Vector2;

use crate::cfg::ON_EDGE_EPS;
use crate::geom::{Point, Polygon};

/// Ring membership with an inclusive boundary (edges and vertices are inside).
pub fn contains(polygon: &Polygon, point: Point) -> bool {
    // grown by the on-edge tolerance so near-edge points reach `on_segment`
    if !polygon.bbox().contains_eps(point, ON_EDGE_EPS) {
        return false;
    }
    let p = point.as_vec();
    if polygon
        .edges()
        .any(|(a, b)| on_segment(a.as_vec(), b.as_vec(), p))
    {
        return true;
    }
    let mut inside = false;
    for (a, b) in polygon.edges() {
        if crosses_ray(a.as_vec(), b.as_vec(), p) {
            inside = !inside;
        }
    }
    inside
}

/// Whether `p` lies on the closed segment `[a, b]`, within `ON_EDGE_EPS` degrees.
pub fn on_segment(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    let (a, b) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };
    let d = b - a;
    let w = p - a;
    let len = d.norm();
    if len == 0.0 {
        return w.norm() <= ON_EDGE_EPS;
    }
    // |d × w| / |d| is the distance from p to the carrier line.
    let cross = d.x * w.y - d.y * w.x;
    if cross.abs() > ON_EDGE_EPS * len {
        return false;
    }
    let t = d.dot(&w);
    t >= -ON_EDGE_EPS * len && t <= len * len + ON_EDGE_EPS * len
}

#[inline]
fn crosses_ray(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    let (lo, hi) = if a.y <= b.y { (a, b) } else { (b, a) };
    // half-open straddle; horizontal edges never pass
    if !(lo.y <= p.y && p.y < hi.y) {
        return false;
    }
    let x = lo.x + (p.y - lo.y) * (hi.x - lo.x) / (hi.y - lo.y);
    x > p.x
}
