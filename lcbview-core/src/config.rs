//! Viewer configuration.

use serde::{Deserialize, Serialize};

use crate::types::TrackIndex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Surface units spanned by the longest track at zoom 1
    #[serde(default = "default_surface_width")]
    pub surface_width: f64,

    /// Surface coordinate of sequence position 0
    #[serde(default)]
    pub surface_origin: f64,

    /// Smallest allowed zoom factor
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,

    /// Largest allowed zoom factor
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,

    /// Track to orient on right after loading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_reference: Option<TrackIndex>,
}

fn default_surface_width() -> f64 { 1000.0 }
fn default_min_zoom() -> f64 { 1.0 }
fn default_max_zoom() -> f64 { 1_000_000.0 }

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            surface_width: default_surface_width(),
            surface_origin: 0.0,
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            initial_reference: None,
        }
    }
}

impl ViewerConfig {
    pub fn with_surface_width(mut self, width: f64) -> Self {
        self.surface_width = width;
        self
    }

    pub fn with_initial_reference(mut self, track: TrackIndex) -> Self {
        self.initial_reference = Some(track);
        self
    }

    /// Zoom bounds in ascending order, falling back to the defaults when the
    /// configured values are unusable.
    pub fn zoom_extent(&self) -> (f64, f64) {
        let valid = |k: f64| k.is_finite() && k > 0.0;
        let min = if valid(self.min_zoom) { self.min_zoom } else { default_min_zoom() };
        let max = if valid(self.max_zoom) { self.max_zoom } else { default_max_zoom() };
        if min <= max { (min, max) } else { (max, min) }
    }
}
