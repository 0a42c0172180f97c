//! Workout form validation.
//!
//! The form delivers raw strings; nothing reaches the ledger until every
//! required field parses to a finite number and every required-positive
//! field is strictly positive. Both checks must pass: zero and negative
//! values are finite but not positive, and `NaN`/`inf` parse but are not
//! finite.

use crate::{Error, KindMetrics, Result, WorkoutKind};

/// User-facing alert raised when a submission fails validation
pub const VALIDATION_ALERT: &str = "Inputs have to be positive numbers!";

/// Raw form fields as entered by the user.
///
/// Only the measurement fields for the selected kind are consulted:
/// cadence for running, elevation gain for cycling.
#[derive(Clone, Debug, Default)]
pub struct WorkoutForm {
    pub kind: String,
    pub distance_km: String,
    pub duration_min: String,
    pub cadence_spm: String,
    pub elevation_gain_m: String,
}

/// Measurements that passed validation and may become a record
#[derive(Clone, Copy, Debug)]
pub struct ValidatedWorkout {
    pub distance_km: f64,
    pub duration_min: f64,
    pub metrics: KindMetrics,
}

/// Parse the kind selector value
pub fn parse_kind(raw: &str) -> Result<WorkoutKind> {
    match raw.trim().to_lowercase().as_str() {
        "running" => Ok(WorkoutKind::Running),
        "cycling" => Ok(WorkoutKind::Cycling),
        other => Err(Error::Validation(format!("Unknown workout type: {other}"))),
    }
}

/// Parse a raw field into a finite number. Empty strings, non-numeric
/// text, `NaN` and infinities all come back as `None`.
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

/// The distance field may be left empty to accept the map estimate for
/// the clicked point; a non-empty field is a user-supplied value.
fn resolve_distance(raw: &str, estimate_km: f64) -> Option<f64> {
    if raw.trim().is_empty() {
        Some(estimate_km)
    } else {
        parse_finite(raw)
    }
}

/// Validate a submitted form against the rules for its selected kind.
///
/// Running requires distance, duration and cadence to be finite and
/// strictly positive. Cycling requires distance and duration to be
/// finite and strictly positive; elevation gain must be finite but its
/// sign is unconstrained. On failure nothing is committed anywhere and
/// the caller surfaces [`VALIDATION_ALERT`].
pub fn validate_form(form: &WorkoutForm, estimate_km: f64) -> Result<ValidatedWorkout> {
    let kind = parse_kind(&form.kind)?;

    let alert = || Error::Validation(VALIDATION_ALERT.to_string());

    let distance_km = resolve_distance(&form.distance_km, estimate_km).ok_or_else(alert)?;
    let duration_min = parse_finite(&form.duration_min).ok_or_else(alert)?;

    let metrics = match kind {
        WorkoutKind::Running => {
            let cadence_spm = parse_finite(&form.cadence_spm).ok_or_else(alert)?;
            if !all_positive(&[distance_km, duration_min, cadence_spm]) {
                return Err(alert());
            }
            KindMetrics::Running { cadence_spm }
        }
        WorkoutKind::Cycling => {
            let elevation_gain_m = parse_finite(&form.elevation_gain_m).ok_or_else(alert)?;
            if !all_positive(&[distance_km, duration_min]) {
                return Err(alert());
            }
            KindMetrics::Cycling { elevation_gain_m }
        }
    };

    Ok(ValidatedWorkout {
        distance_km,
        duration_min,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_form(distance: &str, duration: &str, cadence: &str) -> WorkoutForm {
        WorkoutForm {
            kind: "running".into(),
            distance_km: distance.into(),
            duration_min: duration.into(),
            cadence_spm: cadence.into(),
            ..Default::default()
        }
    }

    fn cycling_form(distance: &str, duration: &str, elevation: &str) -> WorkoutForm {
        WorkoutForm {
            kind: "cycling".into(),
            distance_km: distance.into(),
            duration_min: duration.into(),
            elevation_gain_m: elevation.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_running_form_passes() {
        let validated = validate_form(&running_form("10", "30", "180"), 0.0).unwrap();
        assert_eq!(validated.distance_km, 10.0);
        assert_eq!(validated.duration_min, 30.0);
        assert!(matches!(
            validated.metrics,
            KindMetrics::Running { cadence_spm } if cadence_spm == 180.0
        ));
    }

    #[test]
    fn test_negative_cadence_fails() {
        let result = validate_form(&running_form("10", "30", "-5"), 0.0);
        assert!(matches!(result, Err(Error::Validation(msg)) if msg == VALIDATION_ALERT));
    }

    #[test]
    fn test_non_numeric_distance_fails() {
        let result = validate_form(&running_form("abc", "30", "180"), 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_distance_fails() {
        // Zero is finite but not positive
        let result = validate_form(&running_form("0", "30", "180"), 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_nan_and_infinity_fail() {
        assert!(validate_form(&running_form("NaN", "30", "180"), 0.0).is_err());
        assert!(validate_form(&running_form("inf", "30", "180"), 0.0).is_err());
        assert!(validate_form(&running_form("10", "-inf", "180"), 0.0).is_err());
    }

    #[test]
    fn test_cycling_accepts_negative_elevation() {
        // Elevation gain must be finite but not positive: net descent is valid
        let validated = validate_form(&cycling_form("27", "95", "-120"), 0.0).unwrap();
        assert!(matches!(
            validated.metrics,
            KindMetrics::Cycling { elevation_gain_m } if elevation_gain_m == -120.0
        ));
    }

    #[test]
    fn test_cycling_rejects_non_finite_elevation() {
        assert!(validate_form(&cycling_form("27", "95", ""), 0.0).is_err());
        assert!(validate_form(&cycling_form("27", "95", "NaN"), 0.0).is_err());
    }

    #[test]
    fn test_empty_distance_takes_the_map_estimate() {
        let validated = validate_form(&running_form("", "30", "180"), 4.25).unwrap();
        assert_eq!(validated.distance_km, 4.25);
    }

    #[test]
    fn test_zero_map_estimate_is_rejected() {
        // Clicking the reference point itself estimates 0.00 km
        let result = validate_form(&running_form("", "30", "180"), 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_kind_fails() {
        let form = WorkoutForm {
            kind: "rowing".into(),
            ..Default::default()
        };
        let result = validate_form(&form, 0.0);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_parse_kind_is_case_insensitive() {
        assert_eq!(parse_kind("Running").unwrap(), WorkoutKind::Running);
        assert_eq!(parse_kind("CYCLING").unwrap(), WorkoutKind::Cycling);
    }
}
