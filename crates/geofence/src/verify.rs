//! End-to-end verification of one reading against one boundary.
//!
//! Order of evaluation is fixed: accuracy gate, then point construction, then ring
//! membership. Every outcome is a `Verdict`; nothing here fails or performs I/O.
//!
//! Code cross-refs: `contain::{is_acceptable, Containment}`, `service::AttendanceService`

use serde::{Deserialize, Serialize};

use crate::boundary::Boundary;
use crate::contain::{is_acceptable, Containment, RayCast};
use crate::error::GeofenceError;
use crate::geom::Point;

/// A reported position and its accuracy radius.
///
/// Coordinates are kept raw: an out-of-range position is a verdict (`InvalidReading`),
/// not a construction error. The accuracy is checked here because a negative or
/// non-finite radius is malformed input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    longitude: f64,
    latitude: f64,
    accuracy_m: f64,
}

impl Reading {
    pub fn new(longitude: f64, latitude: f64, accuracy_m: f64) -> Result<Self, GeofenceError> {
        if !accuracy_m.is_finite() || accuracy_m < 0.0 {
            return Err(GeofenceError::InvalidAccuracy { value: accuracy_m });
        }
        Ok(Self {
            longitude,
            latitude,
            accuracy_m,
        })
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn accuracy_m(&self) -> f64 {
        self.accuracy_m
    }
}

/// Why a verdict came out the way it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Success,
    OutsideBoundary,
    InaccurateReading,
    InvalidReading,
    /// The requested boundary does not exist in the store.
    UnknownBoundary,
}

impl Reason {
    /// Human-readable summary returned alongside the verdict.
    pub fn message(&self) -> &'static str {
        match self {
            Reason::Success => "Verification SUCCESS: You are inside the classroom boundary.",
            Reason::OutsideBoundary => {
                "Verification FAILED: You are not inside the classroom boundary."
            }
            Reason::InaccurateReading => "GPS signal too inaccurate. Please try again.",
            Reason::InvalidReading => "Reported position is not a valid coordinate.",
            Reason::UnknownBoundary => "Classroom not found.",
        }
    }
}

/// Attendance decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub inside: bool,
    pub reason: Reason,
}

impl Verdict {
    /// Negative verdict with the given reason.
    #[inline]
    pub fn rejected(reason: Reason) -> Self {
        Self {
            inside: false,
            reason,
        }
    }
}

/// Verify with the default ray-casting containment.
pub fn verify(boundary: &Boundary, reading: &Reading, threshold_m: f64) -> Verdict {
    verify_with(&RayCast, boundary, reading, threshold_m)
}

/// Verify with an explicit containment strategy.
///
/// 1. accuracy gate; failure → `InaccurateReading`, geometry untouched;
/// 2. point construction; failure → `InvalidReading`;
/// 3. ring membership → `Success` or `OutsideBoundary`.
pub fn verify_with<C: Containment + ?Sized>(
    engine: &C,
    boundary: &Boundary,
    reading: &Reading,
    threshold_m: f64,
) -> Verdict {
    match is_acceptable(Some(reading.accuracy_m), threshold_m) {
        Ok(true) => {}
        Ok(false) | Err(_) => return Verdict::rejected(Reason::InaccurateReading),
    }
    let point = match Point::new(reading.longitude, reading.latitude) {
        Ok(p) => p,
        Err(_) => return Verdict::rejected(Reason::InvalidReading),
    };
    if engine.contains(&boundary.polygon, point) {
        Verdict {
            inside: true,
            reason: Reason::Success,
        }
    } else {
        Verdict::rejected(Reason::OutsideBoundary)
    }
}
