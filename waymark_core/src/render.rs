//! Display fields for accepted workout records.
//!
//! Per record the list UI shows a small fixed set of fields: id, kind
//! glyph, description, distance, duration, pace or speed, and cadence
//! or elevation gain. This module derives that set and its text layout;
//! markup is the front-end's business.

use crate::{KindMetrics, SpeedFormula, WorkoutRecord};

/// The display-field set for one list entry
#[derive(Clone, Debug)]
pub struct ListEntry {
    pub id: String,
    pub glyph: &'static str,
    pub description: String,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Pace (running) or speed (cycling)
    pub tempo: f64,
    pub tempo_unit: &'static str,
    /// Cadence (running) or elevation gain (cycling)
    pub extra: f64,
    pub extra_unit: &'static str,
}

impl ListEntry {
    pub fn from_record(record: &WorkoutRecord, formula: SpeedFormula) -> Self {
        let (tempo, tempo_unit, extra, extra_unit) = match record.metrics {
            KindMetrics::Running { cadence_spm } => (
                record.pace_min_per_km().unwrap_or_default(),
                "min/km",
                cadence_spm,
                "spm",
            ),
            KindMetrics::Cycling { elevation_gain_m } => (
                record.speed_km_per_h(formula).unwrap_or_default(),
                "km/h",
                elevation_gain_m,
                "m",
            ),
        };

        Self {
            id: record.id.clone(),
            glyph: record.kind().glyph(),
            description: record.description.clone(),
            distance_km: record.distance_km,
            duration_min: record.duration_min,
            tempo,
            tempo_unit,
            extra,
            extra_unit,
        }
    }
}

/// One text line per entry; the tempo value is shown to 1 decimal,
/// measurements are shown as entered.
pub fn format_entry(entry: &ListEntry) -> String {
    format!(
        "[{}] {} {} | {} km | {} min | {:.1} {} | {} {}",
        entry.id,
        entry.glyph,
        entry.description,
        entry.distance_km,
        entry.duration_min,
        entry.tempo,
        entry.tempo_unit,
        entry.extra,
        entry.extra_unit,
    )
}

/// Popup text for the marker at the record's location
pub fn popup_text(record: &WorkoutRecord) -> String {
    format!("{} {}", record.kind().glyph(), record.description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeoPoint, KindMetrics, WorkoutRecord};
    use chrono::{TimeZone, Utc};

    fn record(metrics: KindMetrics, distance_km: f64, duration_min: f64) -> WorkoutRecord {
        WorkoutRecord::new(
            "0000000001".into(),
            Utc.with_ymd_and_hms(2026, 4, 14, 10, 0, 0).unwrap(),
            GeoPoint { lat: 50.0, lng: 14.0 },
            distance_km,
            duration_min,
            metrics,
        )
    }

    #[test]
    fn test_running_entry_fields() {
        let record = record(KindMetrics::Running { cadence_spm: 150.0 }, 5.0, 25.0);
        let entry = ListEntry::from_record(&record, SpeedFormula::Legacy);

        assert_eq!(entry.id, "0000000001");
        assert_eq!(entry.glyph, "🏃");
        assert_eq!(entry.description, "Running on April 14");
        assert_eq!(entry.tempo, 5.0);
        assert_eq!(entry.tempo_unit, "min/km");
        assert_eq!(entry.extra, 150.0);
        assert_eq!(entry.extra_unit, "spm");
    }

    #[test]
    fn test_cycling_entry_uses_selected_formula() {
        let record = record(KindMetrics::Cycling { elevation_gain_m: 120.0 }, 30.0, 60.0);

        let legacy = ListEntry::from_record(&record, SpeedFormula::Legacy);
        assert_eq!(legacy.tempo, 30.0 / 60.0 / 60.0);
        assert_eq!(legacy.tempo_unit, "km/h");

        let corrected = ListEntry::from_record(&record, SpeedFormula::KmPerHour);
        assert_eq!(corrected.tempo, 30.0);
    }

    #[test]
    fn test_format_entry_line() {
        let record = record(KindMetrics::Running { cadence_spm: 150.0 }, 5.0, 25.0);
        let entry = ListEntry::from_record(&record, SpeedFormula::Legacy);
        let line = format_entry(&entry);

        assert_eq!(
            line,
            "[0000000001] 🏃 Running on April 14 | 5 km | 25 min | 5.0 min/km | 150 spm"
        );
    }

    #[test]
    fn test_tempo_is_displayed_to_one_decimal() {
        let record = record(KindMetrics::Running { cadence_spm: 170.0 }, 3.0, 17.0);
        let entry = ListEntry::from_record(&record, SpeedFormula::Legacy);
        // 17 / 3 = 5.666..., displayed as 5.7
        assert!(format_entry(&entry).contains("5.7 min/km"));
    }

    #[test]
    fn test_popup_text() {
        let record = record(KindMetrics::Cycling { elevation_gain_m: 120.0 }, 27.0, 95.0);
        assert_eq!(popup_text(&record), "🚴 Cycling on April 14");
    }
}
