//! Session control flow.
//!
//! One page load of the original application maps to one [`Session`]:
//! geolocate once, center the map and fix the reference coordinate,
//! then turn map clicks plus form submissions into ledger records and
//! markers. All state is private; collaborators read through accessors.

use crate::geo;
use crate::geoloc::GeolocationProvider;
use crate::ledger::SessionLedger;
use crate::map::{MapSurface, Marker, PopupOptions};
use crate::render;
use crate::validate::{self, WorkoutForm};
use crate::{Error, GeoPoint, Result, WorkoutRecord};
use chrono::{DateTime, Utc};

/// User-facing alert raised when the position lookup fails
pub const GEOLOCATION_ALERT: &str = "Could not get your position";

pub struct Session {
    /// Where the map was centered; origin for distance estimation
    reference: GeoPoint,
    zoom: u8,
    /// The click the open form belongs to
    pending_click: Option<GeoPoint>,
    ledger: SessionLedger,
}

impl Session {
    /// Start a session: one-shot position lookup, then center the map
    /// on the result. A failed lookup leaves no session behind; without
    /// a map there is nothing to click, so the caller surfaces
    /// [`GEOLOCATION_ALERT`] and gives up.
    pub fn start(
        provider: &dyn GeolocationProvider,
        map: &mut dyn MapSurface,
        zoom: u8,
    ) -> Result<Self> {
        let position = provider.current_position().map_err(|e| {
            tracing::warn!("Position lookup failed: {}", e);
            e
        })?;

        map.set_view(position, zoom);
        tracing::info!(
            "Map centered at ({}, {}), zoom {}",
            position.lat,
            position.lng,
            zoom
        );

        Ok(Self {
            reference: position,
            zoom,
            pending_click: None,
            ledger: SessionLedger::new(),
        })
    }

    pub fn reference(&self) -> GeoPoint {
        self.reference
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn pending_click(&self) -> Option<GeoPoint> {
        self.pending_click
    }

    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    /// A map click: remembered until the form for it is submitted.
    /// The front-end shows the form in response.
    pub fn click(&mut self, at: GeoPoint) {
        tracing::debug!("Map clicked at ({}, {})", at.lat, at.lng);
        self.pending_click = Some(at);
    }

    /// Submit the workout form for the pending click.
    ///
    /// An empty distance field takes the map estimate from the reference
    /// point to the click. On success the record is appended, a marker
    /// with its popup is placed at the click, and the click is consumed
    /// (the form closes). On validation failure nothing is committed and
    /// the click is retained, so the open form can be corrected and
    /// resubmitted; this is the only recovery boundary in the system.
    pub fn submit(
        &mut self,
        form: &WorkoutForm,
        map: &mut dyn MapSurface,
        now: DateTime<Utc>,
    ) -> Result<&WorkoutRecord> {
        let click = self
            .pending_click
            .ok_or_else(|| Error::Session("no map click to attach the workout to".into()))?;

        let estimate_km = geo::estimate_distance_km(self.reference, click);
        let validated = validate::validate_form(form, estimate_km)?;

        let record = self.ledger.record(
            now,
            click,
            validated.distance_km,
            validated.duration_min,
            validated.metrics,
        );

        map.place_marker(Marker {
            at: click,
            label: render::popup_text(record),
            popup: PopupOptions::for_kind(record.kind()),
        });

        self.pending_click = None;
        Ok(record)
    }
}
