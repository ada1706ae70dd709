//! Subcommand bodies. Each returns the JSON response printed on stdout.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use geofence::api::{
    sample_polygon, BoundaryStore, CheckError, CheckRequest, GeofenceError, Polygon, Reason,
};
use geofence::sample::SAMPLE_NAME;
use geofence::service::AttendanceService;
use serde_json::{json, Value};

pub fn setup<S: BoundaryStore>(
    service: &AttendanceService<S>,
    name: Option<String>,
    polygon: Option<&Path>,
) -> Result<Value> {
    let polygon = match polygon {
        Some(path) => read_polygon(path)?,
        None => sample_polygon(),
    };
    let name = name.unwrap_or_else(|| SAMPLE_NAME.to_string());
    tracing::info!(name = %name, vertices = polygon.vertices().len(), "setup");
    let id = service.setup(&name, polygon).context("saving classroom")?;
    Ok(json!({
        "message": "Test classroom created successfully! You can now verify your location against this classroom.",
        "classroomId": id,
    }))
}

pub fn check<S: BoundaryStore>(service: &AttendanceService<S>, req: CheckRequest) -> Result<Value> {
    let accuracy = req.accuracy;
    match service.check(req) {
        Ok(verdict) => {
            let message = match verdict.reason {
                Reason::InaccurateReading => format!(
                    "GPS signal too inaccurate (Accuracy: {}m). Please try again. Required accuracy: {}m.",
                    accuracy.unwrap_or_default(),
                    service.gate().max_accuracy_m
                ),
                other => other.message().to_string(),
            };
            Ok(json!({
                "success": verdict.inside,
                "reason": verdict.reason,
                "message": message,
            }))
        }
        Err(CheckError::Request(e)) => {
            let message = match e {
                GeofenceError::MissingField { .. } => {
                    "Missing required fields: classroomId, latitude, longitude, accuracy."
                        .to_string()
                }
                other => format!("Invalid request: {other}."),
            };
            Ok(json!({
                "success": false,
                "message": message,
            }))
        }
        Err(e) => Err(e).context("attendance check"),
    }
}

pub fn list<S: BoundaryStore>(service: &AttendanceService<S>) -> Result<Value> {
    let all = service.store().list().context("listing classrooms")?;
    Ok(serde_json::to_value(all)?)
}

/// Read a `CheckRequest` from a file, or from stdin when `path` is `-`.
pub fn read_request(path: &Path) -> Result<CheckRequest> {
    let mut raw = String::new();
    if path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("reading request from stdin")?;
    } else {
        raw = fs::read_to_string(path)
            .with_context(|| format!("reading request {}", path.display()))?;
    }
    serde_json::from_str(&raw).context("parsing request body")
}

fn read_polygon(path: &Path) -> Result<Polygon> {
    let raw =
        fs::read(path).with_context(|| format!("reading polygon {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing polygon {}", path.display()))
}
