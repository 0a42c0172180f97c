//! Display labels for workout records.

use crate::WorkoutKind;
use chrono::{DateTime, Datelike, Utc};

/// Month names for record descriptions
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Human-readable label for a record, e.g. `Running on April 14`.
///
/// Built from the creation timestamp exactly once, when the record is
/// constructed; callers store the result rather than recomputing it.
pub fn describe(kind: WorkoutKind, at: DateTime<Utc>) -> String {
    let month = MONTHS[at.month0() as usize];
    format!("{} on {} {}", kind.label(), month, at.day())
}
