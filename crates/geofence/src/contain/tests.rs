use super::*;
use crate::error::GeofenceError;
use crate::geom::{Point, Polygon};
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn classroom() -> Polygon {
    Polygon::from_lon_lat(&[
        (72.8490, 21.2407),
        (72.8490, 21.2409),
        (72.8492, 21.2409),
        (72.8492, 21.2407),
        (72.8490, 21.2407),
    ])
    .unwrap()
}

fn pt(lon: f64, lat: f64) -> Point {
    Point::new(lon, lat).unwrap()
}

/// Star-shaped ring around `(cx, cy)`: sorted angles, jittered radii, closed.
fn star_ring(cx: f64, cy: f64, angles: &mut [f64], radii: &[f64]) -> Option<Polygon> {
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mut pts: Vec<Point> = angles
        .iter()
        .zip(radii)
        .map(|(t, r)| Point::new(cx + r * t.cos(), cy + r * t.sin()))
        .collect::<Result<_, _>>()
        .ok()?;
    pts.push(pts[0]);
    Polygon::new(pts).ok()
}

#[test]
fn gate_threshold_is_inclusive() {
    assert_eq!(is_acceptable(Some(15.0), 15.0), Ok(true));
    assert_eq!(is_acceptable(Some(15.000001), 15.0), Ok(false));
    assert_eq!(is_acceptable(Some(0.0), 15.0), Ok(true));
}

#[test]
fn gate_missing_is_distinct_from_zero() {
    assert_eq!(
        is_acceptable(None, 15.0),
        Err(GeofenceError::MissingField { field: "accuracy" })
    );
    assert!(is_acceptable(Some(0.0), 0.0).unwrap());
}

#[test]
fn gate_rejects_malformed_accuracy() {
    assert!(matches!(
        is_acceptable(Some(-0.5), 15.0),
        Err(GeofenceError::InvalidAccuracy { .. })
    ));
    assert!(is_acceptable(Some(f64::NAN), 15.0).is_err());
    assert!(is_acceptable(Some(f64::INFINITY), 15.0).is_err());
}

#[test]
fn classroom_interior_and_exterior() {
    let poly = classroom();
    assert!(contains(&poly, pt(72.84905, 21.24080)));
    assert!(!contains(&poly, pt(72.8600, 21.2500)));
    // just east of the ring
    assert!(!contains(&poly, pt(72.84921, 21.2408)));
}

#[test]
fn edge_midpoints_and_corners_are_inside() {
    let poly = classroom();
    assert!(contains(&poly, pt(72.8490, (21.2407 + 21.2409) / 2.0)));
    assert!(contains(&poly, pt((72.8490 + 72.8492) / 2.0, 21.2409)));
    assert!(contains(&poly, pt((72.8490 + 72.8492) / 2.0, 21.2407)));
    assert!(contains(&poly, pt(72.8492, 21.2408)));
    for v in poly.vertices() {
        assert!(contains(&poly, *v));
    }
}

#[test]
fn ray_through_reflex_vertex() {
    // Square with a notch whose tip (1, 0) sits on the test latitude.
    let notch = Polygon::from_lon_lat(&[
        (0.0, -1.0),
        (2.0, -1.0),
        (2.0, 1.0),
        (0.0, 1.0),
        (1.0, 0.0),
        (0.0, -1.0),
    ])
    .unwrap();
    assert!(!contains(&notch, pt(0.5, 0.0)));
    assert!(contains(&notch, pt(1.5, 0.0)));
    assert!(contains(&notch, pt(1.0, 0.0)));
    assert!(contains(&notch, pt(0.5, 0.5)));
    assert!(!contains(&notch, pt(0.2, 0.0)));
}

#[test]
fn ray_through_convex_vertex() {
    let diamond =
        Polygon::from_lon_lat(&[(0.0, 1.0), (1.0, 0.0), (0.0, -1.0), (-1.0, 0.0), (0.0, 1.0)])
            .unwrap();
    assert!(contains(&diamond, pt(-0.5, 0.0)));
    assert!(contains(&diamond, pt(0.0, 0.0)));
    assert!(!contains(&diamond, pt(0.9, 0.9)));
    assert!(!contains(&diamond, pt(-0.9, -0.9)));
}

#[test]
fn on_segment_tolerance() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 1.0];
    assert!(on_segment(a, b, vector![0.5, 0.5]));
    assert!(on_segment(b, a, vector![0.5, 0.5]));
    assert!(on_segment(a, b, a));
    assert!(!on_segment(a, b, vector![1.5, 1.5]));
    assert!(!on_segment(a, b, vector![0.5, 0.5 + 1e-9]));
    // degenerate segment
    assert!(on_segment(a, a, a));
    assert!(!on_segment(a, a, b));
}

#[test]
fn near_axis_aligned_edge_counts_as_on_edge() {
    let poly = classroom();
    let near = [
        (72.8490 - 5e-13, 21.2408),
        (72.8492 + 5e-13, 21.2408),
        (72.8491, 21.2407 - 5e-13),
        (72.8491, 21.2409 + 5e-13),
    ];
    for (lon, lat) in near {
        let p = pt(lon, lat);
        let on_edge = poly
            .edges()
            .any(|(a, b)| on_segment(a.as_vec(), b.as_vec(), p.as_vec()));
        assert!(on_edge, "({lon}, {lat})");
        assert_eq!(contains(&poly, p), on_edge, "({lon}, {lat})");
    }
    // beyond the tolerance the bbox reject still applies
    assert!(!contains(&poly, pt(72.8490 - 1e-9, 21.2408)));
    assert!(!contains(&poly, pt(72.8491, 21.2409 + 1e-9)));
}

#[test]
fn near_diagonal_edge_counts_as_on_edge() {
    let tri = Polygon::from_lon_lat(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]).unwrap();
    let p = pt(0.5 + 3e-13, 0.5);
    assert!(on_segment(vector![1.0, 0.0], vector![0.0, 1.0], p.as_vec()));
    assert!(contains(&tri, p));
}

#[test]
fn random_rectangles_match_interval_oracle() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let x0 = rng.gen_range(-170.0..170.0);
        let y0 = rng.gen_range(-80.0..80.0);
        let w = rng.gen_range(1e-5..5.0);
        let h = rng.gen_range(1e-5..5.0);
        let poly = Polygon::from_lon_lat(&[
            (x0, y0),
            (x0 + w, y0),
            (x0 + w, y0 + h),
            (x0, y0 + h),
            (x0, y0),
        ])
        .unwrap();
        for _ in 0..20 {
            let px = rng.gen_range(x0 - w..x0 + 2.0 * w);
            let py = rng.gen_range(y0 - h..y0 + 2.0 * h);
            let expected = (x0..=x0 + w).contains(&px) && (y0..=y0 + h).contains(&py);
            assert_eq!(contains(&poly, pt(px, py)), expected, "({px}, {py})");
        }
    }
}

#[test]
fn ray_cast_strategy_delegates() {
    let poly = classroom();
    let p = pt(72.84905, 21.24080);
    assert_eq!(RayCast.contains(&poly, p), contains(&poly, p));
}

fn ring_strategy() -> impl Strategy<Value = (f64, f64, Vec<f64>, Vec<f64>)> {
    (3usize..12).prop_flat_map(|n| {
        (
            -170.0..170.0f64,
            -80.0..80.0f64,
            prop::collection::vec(0.0..std::f64::consts::TAU, n),
            prop::collection::vec(0.1..5.0f64, n),
        )
    })
}

proptest! {
    #[test]
    fn gate_matches_ordering(a in 0.0..1_000.0f64, t in 0.0..1_000.0f64) {
        prop_assert_eq!(is_acceptable(Some(a), t), Ok(a <= t));
    }

    #[test]
    fn gate_rejects_any_negative(a in -1_000.0..-1e-9f64, t in 0.0..1_000.0f64) {
        prop_assert!(is_acceptable(Some(a), t).is_err());
    }

    #[test]
    fn every_vertex_is_inside((cx, cy, mut angles, radii) in ring_strategy()) {
        let poly = star_ring(cx, cy, &mut angles, &radii);
        prop_assume!(poly.is_some());
        let poly = poly.unwrap();
        for v in poly.vertices() {
            prop_assert!(contains(&poly, *v));
        }
    }

    #[test]
    fn winding_does_not_change_verdict(
        (cx, cy, mut angles, radii) in ring_strategy(),
        dx in -6.0..6.0f64,
        dy in -6.0..6.0f64,
    ) {
        let poly = star_ring(cx, cy, &mut angles, &radii);
        prop_assume!(poly.is_some());
        let poly = poly.unwrap();
        let p = pt(cx + dx, cy + dy);
        prop_assert_eq!(contains(&poly, p), contains(&poly.reversed(), p));
    }

    #[test]
    fn contains_is_idempotent(
        (cx, cy, mut angles, radii) in ring_strategy(),
        dx in -6.0..6.0f64,
        dy in -6.0..6.0f64,
    ) {
        let poly = star_ring(cx, cy, &mut angles, &radii);
        prop_assume!(poly.is_some());
        let poly = poly.unwrap();
        let p = pt(cx + dx, cy + dy);
        let first = contains(&poly, p);
        prop_assert_eq!(first, contains(&poly, p));
    }
}
