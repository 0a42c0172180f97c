//! In-memory session ledger of accepted workout records.
//!
//! The ledger holds the ordered sequence of records for one running
//! session and owns the identifier counter. Records are appended after
//! validation and never mutated or removed; the whole ledger is
//! discarded when the process exits. No serialization.

use crate::ident::IdCounter;
use crate::{GeoPoint, KindMetrics, WorkoutRecord};
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct SessionLedger {
    records: Vec<WorkoutRecord>,
    ids: IdCounter,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: IdCounter::new(),
        }
    }

    /// Construct a record from validated measurements and append it.
    /// Always succeeds for validated input; O(1).
    pub fn record(
        &mut self,
        at: DateTime<Utc>,
        location: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        metrics: KindMetrics,
    ) -> &WorkoutRecord {
        let id = self.ids.next_id();
        let record = WorkoutRecord::new(id, at, location, distance_km, duration_min, metrics);
        tracing::debug!("Recorded workout {} ({})", record.id, record.description);
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Records in insertion order
    pub fn records(&self) -> &[WorkoutRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
