//! Geolocation providers.
//!
//! The session needs exactly one position, once, at startup. A provider
//! either produces a coordinate pair or fails; there is no retry. Which
//! provider backs the lookup is a front-end decision (CLI flags, a
//! position file written by an external locator, or a configured
//! fallback).

use crate::{Error, GeoPoint, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One-shot device position lookup
pub trait GeolocationProvider {
    fn current_position(&self) -> Result<GeoPoint>;
}

/// A fixed, known-good position (CLI override or configured fallback)
#[derive(Clone, Copy, Debug)]
pub struct FixedPosition(pub GeoPoint);

impl GeolocationProvider for FixedPosition {
    fn current_position(&self) -> Result<GeoPoint> {
        Ok(self.0)
    }
}

/// Position file format (matches external locator output)
#[derive(Debug, Deserialize)]
struct PositionFileFormat {
    lat: f64,
    lng: f64,
}

/// Reads the device position from a JSON file maintained by an external
/// locator process.
#[derive(Clone, Debug)]
pub struct PositionFile {
    path: PathBuf,
}

impl PositionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GeolocationProvider for PositionFile {
    fn current_position(&self) -> Result<GeoPoint> {
        if !self.path.exists() {
            return Err(Error::Geolocation(format!(
                "no position file at {:?}",
                self.path
            )));
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Geolocation(format!("unable to read {:?}: {}", self.path, e)))?;

        let file: PositionFileFormat = serde_json::from_str(&contents)
            .map_err(|e| Error::Geolocation(format!("malformed position file: {}", e)))?;

        if !file.lat.is_finite() || !file.lng.is_finite() {
            return Err(Error::Geolocation(format!(
                "position file holds non-finite coordinates ({}, {})",
                file.lat, file.lng
            )));
        }

        tracing::info!("Read position ({}, {}) from {:?}", file.lat, file.lng, self.path);

        Ok(GeoPoint {
            lat: file.lat,
            lng: file.lng,
        })
    }
}

/// Used when no locator is configured at all: every lookup is denied
#[derive(Clone, Copy, Debug, Default)]
pub struct Unavailable;

impl GeolocationProvider for Unavailable {
    fn current_position(&self) -> Result<GeoPoint> {
        Err(Error::Geolocation("no locator available".into()))
    }
}
