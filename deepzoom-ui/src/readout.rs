//! Position/zoom readout and its editor.

use deepzoom_core::Camera;
use log::warn;
use serde::{Deserialize, Serialize};

/// Smallest zoom the editor accepts; lower values are raised to it.
pub const MIN_EDITED_ZOOM: f64 = 1.0;

/// Current center in plane units and zoom, for display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Readout {
    pub fn from_camera(camera: &Camera) -> Self {
        let (x, y) = camera.plane_center();
        Self {
            x,
            y,
            zoom: camera.zoom(),
        }
    }

    /// Display strings for x, y and zoom.
    pub fn formatted(&self) -> [String; 3] {
        [
            format_readout_value(self.x),
            format_readout_value(self.y),
            format_readout_value(self.zoom),
        ]
    }
}

/// Format a readout number: scientific for tiny or huge magnitudes, otherwise
/// fewer decimals as the magnitude grows.
pub fn format_readout_value(value: f64) -> String {
    let magnitude = value.abs();
    if (magnitude > 0.0 && magnitude < 0.001) || magnitude >= 1e6 {
        format!("{:.3e}", value)
    } else if magnitude < 1.0 {
        format!("{:.5}", value)
    } else if magnitude < 1000.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.0}", value)
    }
}

/// A value typed into one readout field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReadoutEdit {
    X(f64),
    Y(f64),
    Zoom(f64),
}

impl ReadoutEdit {
    /// Parse editor text for the field named `x`, `y` or `zoom`.
    pub fn parse(field: &str, text: &str) -> Option<Self> {
        let value: f64 = text.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        match field {
            "x" => Some(Self::X(value)),
            "y" => Some(Self::Y(value)),
            "zoom" => Some(Self::Zoom(value)),
            _ => None,
        }
    }
}

/// Write an edited value through the camera setters.
pub fn apply_edit(camera: &mut Camera, edit: ReadoutEdit) {
    match edit {
        ReadoutEdit::X(value) => camera.set_plane_center_x(value),
        ReadoutEdit::Y(value) => camera.set_plane_center_y(value),
        ReadoutEdit::Zoom(value) if value.is_nan() => warn!("ignoring NaN zoom edit"),
        ReadoutEdit::Zoom(value) => {
            let zoom = if value < MIN_EDITED_ZOOM {
                warn!("edited zoom {} raised to {}", value, MIN_EDITED_ZOOM);
                MIN_EDITED_ZOOM
            } else {
                value
            };
            camera.set_zoom(zoom);
        }
    }
}
