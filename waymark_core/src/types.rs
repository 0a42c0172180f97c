//! Core domain types for the Waymark workout log.
//!
//! This module defines the fundamental types used throughout the system:
//! - Geographic coordinates
//! - Workout kinds and their kind-specific measurements
//! - The workout record with its derived metrics

use crate::describe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Kind of workout
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Capitalized display name
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    /// Glyph shown next to the workout in lists and popups
    pub fn glyph(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃",
            WorkoutKind::Cycling => "🚴",
        }
    }

    /// Style class attached to the marker popup for this kind
    pub fn popup_class(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running-popup",
            WorkoutKind::Cycling => "cycling-popup",
        }
    }
}

/// Kind-specific measurements as two flat variants
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KindMetrics {
    /// Running carries a cadence in steps per minute
    Running { cadence_spm: f64 },
    /// Cycling carries an elevation gain in meters.
    /// May be zero or negative: a net-descent ride is a valid ride.
    Cycling { elevation_gain_m: f64 },
}

impl KindMetrics {
    /// The discriminator for these measurements
    pub fn kind(&self) -> WorkoutKind {
        match self {
            KindMetrics::Running { .. } => WorkoutKind::Running,
            KindMetrics::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Which cycling speed formula to apply.
///
/// `Legacy` reproduces the historical computation
/// `distance_km / duration_min / 60.0` exactly. Its result is not km/h
/// (the duration is already in minutes, so the second division by 60 is
/// one too many), but existing displays depend on it.
/// `KmPerHour` is the unit-consistent form, opt-in via configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpeedFormula {
    #[default]
    Legacy,
    KmPerHour,
}

/// One logged workout: user-entered measurements plus the values fixed
/// at construction time (id, timestamp, description).
///
/// Records are created by [`crate::ledger::SessionLedger`] after
/// validation and are never mutated or removed afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: String,
    pub recorded_at: DateTime<Utc>,
    pub location: GeoPoint,
    pub distance_km: f64,
    pub duration_min: f64,
    pub metrics: KindMetrics,
    pub description: String,
}

impl WorkoutRecord {
    /// Build a record. The description is computed here, once, and kept
    /// verbatim for the lifetime of the record.
    pub fn new(
        id: String,
        recorded_at: DateTime<Utc>,
        location: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        metrics: KindMetrics,
    ) -> Self {
        let description = describe::describe(metrics.kind(), recorded_at);
        Self {
            id,
            recorded_at,
            location,
            distance_km,
            duration_min,
            metrics,
            description,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        self.metrics.kind()
    }

    /// Running pace in minutes per kilometer. `None` for cycling records.
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.metrics {
            KindMetrics::Running { .. } => Some(self.duration_min / self.distance_km),
            KindMetrics::Cycling { .. } => None,
        }
    }

    /// Cycling speed under the selected formula. `None` for running records.
    pub fn speed_km_per_h(&self, formula: SpeedFormula) -> Option<f64> {
        match self.metrics {
            KindMetrics::Cycling { .. } => Some(match formula {
                SpeedFormula::Legacy => self.distance_km / self.duration_min / 60.0,
                SpeedFormula::KmPerHour => self.distance_km / (self.duration_min / 60.0),
            }),
            KindMetrics::Running { .. } => None,
        }
    }
}
