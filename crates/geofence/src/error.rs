//! Error taxonomy for construction and request validation.
//!
//! These are caller errors: the input is rejected before any evaluation happens.
//! Legitimate business outcomes (inaccurate reading, outside the boundary) are
//! verdict reasons, see `verify::Reason`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeofenceError {
    #[error("invalid coordinate: longitude {longitude}, latitude {latitude}")]
    InvalidCoordinate { longitude: f64, latitude: f64 },

    #[error("invalid polygon: {reason}")]
    InvalidPolygon { reason: String },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid accuracy: {value} (must be a finite, non-negative number of meters)")]
    InvalidAccuracy { value: f64 },

    #[error("invalid accuracy threshold: {value}")]
    InvalidThreshold { value: f64 },
}

impl GeofenceError {
    pub(crate) fn polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }
}
