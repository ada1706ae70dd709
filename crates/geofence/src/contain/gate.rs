use crate::error::GeofenceError;

/// Accuracy gate: accept when `accuracy_m <= threshold_m`.
///
/// Pre: `accuracy_m` is the reported radius in meters; `None` means the field was absent,
/// which is not the same as a reported 0.
/// Post: `Ok(false)` for readings worse than the threshold; `Err` for absent, negative or
/// non-finite accuracy.
pub fn is_acceptable(accuracy_m: Option<f64>, threshold_m: f64) -> Result<bool, GeofenceError> {
    let a = accuracy_m.ok_or(GeofenceError::MissingField { field: "accuracy" })?;
    if !a.is_finite() || a < 0.0 {
        return Err(GeofenceError::InvalidAccuracy { value: a });
    }
    Ok(a <= threshold_m)
}
