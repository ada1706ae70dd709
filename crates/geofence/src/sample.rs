//! The built-in test classroom: a ~20 m square, used by `attendance setup` and tests.

use crate::boundary::{Boundary, BoundaryId};
use crate::geom::{Point, Polygon};

pub const SAMPLE_NAME: &str = "My Home Office (Test Classroom)";

/// Corners in (lon, lat), closing point included.
pub const SAMPLE_RING: [(f64, f64); 5] = [
    (72.849000, 21.240700),
    (72.849000, 21.240900),
    (72.849200, 21.240900),
    (72.849200, 21.240700),
    (72.849000, 21.240700),
];

/// Sample polygon. The ring is a compile-time constant that satisfies every
/// `Polygon` invariant, so it is built without the fallible path.
pub fn sample_polygon() -> Polygon {
    let ring = SAMPLE_RING.map(|(lon, lat)| Point::new_unchecked(lon, lat));
    Polygon::new_unchecked(ring.to_vec())
}

/// Sample boundary under a fixed id.
pub fn sample_classroom() -> Boundary {
    Boundary {
        id: BoundaryId::new("sample-classroom"),
        name: SAMPLE_NAME.to_string(),
        polygon: sample_polygon(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_matches_validated_construction() {
        assert_eq!(
            sample_polygon(),
            Polygon::from_lon_lat(&SAMPLE_RING).unwrap()
        );
    }
}
