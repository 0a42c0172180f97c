#![forbid(unsafe_code)]

//! Core domain model and session logic for the Waymark workout log.
//!
//! This crate provides:
//! - Domain types (workouts, coordinates, derived metrics)
//! - Distance estimation from map coordinates
//! - Workout form validation
//! - The session ledger and session control flow
//! - Geolocation and map-surface seams for front-ends

pub mod config;
pub mod describe;
pub mod error;
pub mod geo;
pub mod geoloc;
pub mod ident;
pub mod ledger;
pub mod logging;
pub mod map;
pub mod render;
pub mod session;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::estimate_distance_km;
pub use geoloc::{FixedPosition, GeolocationProvider, PositionFile, Unavailable};
pub use ledger::SessionLedger;
pub use map::{MapSurface, Marker, MarkerBoard, PopupOptions};
pub use render::{format_entry, popup_text, ListEntry};
pub use session::{Session, GEOLOCATION_ALERT};
pub use types::*;
pub use validate::{validate_form, WorkoutForm, VALIDATION_ALERT};
