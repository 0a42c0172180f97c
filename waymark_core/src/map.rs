//! Map surface seam.
//!
//! The core needs three things from a map widget: center the view on a
//! coordinate, receive click coordinates (delivered by the front-end),
//! and place markers with a text popup. Tiles, panning and zooming are
//! the widget's own business.

use crate::{GeoPoint, WorkoutKind};

/// Popup rendering options carried with each marker
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
    /// Kind-specific style tag, e.g. `running-popup`
    pub class_name: String,
}

impl PopupOptions {
    /// The popup configuration used for workout markers: stays open,
    /// survives map clicks, styled per workout kind.
    pub fn for_kind(kind: WorkoutKind) -> Self {
        Self {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
            class_name: kind.popup_class().to_string(),
        }
    }
}

/// A marker placed on the map
#[derive(Clone, Debug)]
pub struct Marker {
    pub at: GeoPoint,
    pub label: String,
    pub popup: PopupOptions,
}

/// The contract a map widget fulfils for the session
pub trait MapSurface {
    fn set_view(&mut self, center: GeoPoint, zoom: u8);
    fn place_marker(&mut self, marker: Marker);
}

/// In-memory map surface: remembers the view and the placed markers.
/// Backs the terminal front-end and the tests.
#[derive(Debug, Default)]
pub struct MarkerBoard {
    view: Option<(GeoPoint, u8)>,
    markers: Vec<Marker>,
}

impl MarkerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<(GeoPoint, u8)> {
        self.view
    }

    /// Markers in placement order
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

impl MapSurface for MarkerBoard {
    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        tracing::debug!("Map view set to ({}, {}) zoom {}", center.lat, center.lng, zoom);
        self.view = Some((center, zoom));
    }

    fn place_marker(&mut self, marker: Marker) {
        tracing::debug!("Marker placed at ({}, {}): {}", marker.at.lat, marker.at.lng, marker.label);
        self.markers.push(marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_view_is_remembered() {
        let mut board = MarkerBoard::new();
        assert!(board.view().is_none());

        board.set_view(GeoPoint { lat: 50.0, lng: 14.0 }, 15);
        let (center, zoom) = board.view().unwrap();
        assert_eq!(center.lat, 50.0);
        assert_eq!(zoom, 15);
    }

    #[test]
    fn test_markers_keep_placement_order() {
        let mut board = MarkerBoard::new();
        for i in 0..3 {
            board.place_marker(Marker {
                at: GeoPoint { lat: i as f64, lng: 0.0 },
                label: format!("marker {i}"),
                popup: PopupOptions::for_kind(WorkoutKind::Running),
            });
        }

        let labels: Vec<&str> = board.markers().iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["marker 0", "marker 1", "marker 2"]);
    }

    #[test]
    fn test_popup_options_per_kind() {
        let running = PopupOptions::for_kind(WorkoutKind::Running);
        assert_eq!(running.class_name, "running-popup");
        assert_eq!(running.max_width, 250);
        assert_eq!(running.min_width, 100);
        assert!(!running.auto_close);
        assert!(!running.close_on_click);

        let cycling = PopupOptions::for_kind(WorkoutKind::Cycling);
        assert_eq!(cycling.class_name, "cycling-popup");
    }
}
