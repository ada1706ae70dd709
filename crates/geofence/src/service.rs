//! Attendance service: composes request parsing, the accuracy gate, a boundary store and
//! `verify` into the check-attendance flow.
//!
//! Flow
//! - parse `CheckRequest` into a `Reading` (missing fields are request errors);
//! - accuracy gate, before any store lookup;
//! - store lookup (`None` → `UnknownBoundary` verdict);
//! - `verify`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::boundary::{BoundaryId, BoundaryStore, StoreError};
use crate::cfg::GateCfg;
use crate::contain::is_acceptable;
use crate::error::GeofenceError;
use crate::geom::Polygon;
use crate::verify::{verify, Reading, Reason, Verdict};

/// Check-attendance request body as received from a client.
///
/// Every field is optional at parse time so that absence can be reported precisely.
/// A numeric `0` is a present value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub classroom_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub accuracy: Option<f64>,
}

impl CheckRequest {
    /// Typed parts, or `MissingField` for the first absent field.
    pub fn into_parts(self) -> Result<(BoundaryId, Reading), GeofenceError> {
        let id = self
            .classroom_id
            .filter(|s| !s.is_empty())
            .ok_or(GeofenceError::MissingField {
                field: "classroomId",
            })?;
        let latitude = self
            .latitude
            .ok_or(GeofenceError::MissingField { field: "latitude" })?;
        let longitude = self
            .longitude
            .ok_or(GeofenceError::MissingField { field: "longitude" })?;
        let accuracy = self
            .accuracy
            .ok_or(GeofenceError::MissingField { field: "accuracy" })?;
        let reading = Reading::new(longitude, latitude, accuracy)?;
        Ok((BoundaryId::new(id), reading))
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Request(#[from] GeofenceError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Check-attendance entry point with an injected store.
#[derive(Debug)]
pub struct AttendanceService<S> {
    store: S,
    gate: GateCfg,
}

impl<S: BoundaryStore> AttendanceService<S> {
    pub fn new(store: S, gate: GateCfg) -> Self {
        Self { store, gate }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn gate(&self) -> GateCfg {
        self.gate
    }

    /// Define a new boundary; returns its generated id.
    pub fn setup(&self, name: &str, polygon: Polygon) -> Result<BoundaryId, StoreError> {
        if polygon.crosses_antimeridian() {
            tracing::warn!(
                name,
                "boundary spans the antimeridian; planar containment will not match it"
            );
        }
        self.store.insert(name, polygon)
    }

    /// Run one attendance check.
    pub fn check(&self, request: CheckRequest) -> Result<Verdict, CheckError> {
        let (id, reading) = request.into_parts()?;
        let threshold = self.gate.max_accuracy_m;
        if !is_acceptable(Some(reading.accuracy_m()), threshold)? {
            tracing::info!(
                id = %id,
                accuracy_m = reading.accuracy_m(),
                max_accuracy_m = threshold,
                "reading_rejected_inaccurate"
            );
            return Ok(Verdict::rejected(Reason::InaccurateReading));
        }
        let Some(boundary) = self.store.get(&id)? else {
            tracing::info!(id = %id, "boundary_not_found");
            return Ok(Verdict::rejected(Reason::UnknownBoundary));
        };
        let verdict = verify(&boundary, &reading, threshold);
        tracing::info!(
            id = %id,
            inside = verdict.inside,
            reason = ?verdict.reason,
            "attendance_verdict"
        );
        Ok(verdict)
    }
}
