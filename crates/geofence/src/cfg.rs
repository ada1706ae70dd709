//! Tolerances and gate configuration.
//!
//! Policy
//! - Numeric tolerances are fixed constants; call sites never pass epsilons around.
//! - The accuracy threshold is the only tunable that changes verdicts, so it lives in a
//!   small `GateCfg` value handed to `verify` and the attendance service.

use crate::error::GeofenceError;

/// Default maximum accepted accuracy radius in meters.
pub const DEFAULT_MAX_ACCURACY_M: f64 = 15.0;

/// Distance (in degrees) under which a point counts as lying on an edge.
/// 1e-12° is well below a micrometer on the ground.
pub(crate) const ON_EDGE_EPS: f64 = 1e-12;

/// Longitude span above which an edge is taken to wrap across the antimeridian.
pub(crate) const ANTIMERIDIAN_SPAN: f64 = 180.0;

/// Accuracy-gate configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GateCfg {
    /// Readings whose accuracy radius exceeds this many meters are rejected.
    pub max_accuracy_m: f64,
}

impl Default for GateCfg {
    fn default() -> Self {
        Self {
            max_accuracy_m: DEFAULT_MAX_ACCURACY_M,
        }
    }
}

impl GateCfg {
    pub fn new(max_accuracy_m: f64) -> Result<Self, GeofenceError> {
        let cfg = Self { max_accuracy_m };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Threshold must be a finite, non-negative number of meters.
    pub fn validate(&self) -> Result<(), GeofenceError> {
        if !self.max_accuracy_m.is_finite() || self.max_accuracy_m < 0.0 {
            return Err(GeofenceError::InvalidThreshold {
                value: self.max_accuracy_m,
            });
        }
        Ok(())
    }
}
