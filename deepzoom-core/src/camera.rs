//! Camera: view center and log-scale zoom with anchor-preserving transforms.
//!
//! The center is kept in pixel units at the current zoom (the plane point
//! under a pixel is `(pixel - resolution/2 - center) / zoom`), so pan deltas
//! from input apply directly. Zoom is stored as an exponent of `zoom_speed`
//! so repeated steps never accumulate multiplication drift.

use crate::ExplorerConfig;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Copy of the camera state taken at the start of an evaluation pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
}

impl ViewSnapshot {
    pub fn new(center_x: f64, center_y: f64, zoom: f64) -> Self {
        Self {
            center_x,
            center_y,
            zoom,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    center_x: f64,
    center_y: f64,
    zoom_log: f64,
    zoom_speed: f64,
    min_zoom: f64,
}

impl Camera {
    /// Create a camera. `zoom_speed` must exceed 1 and `min_zoom` be positive;
    /// `ExplorerConfig::validate` guarantees both for configured cameras.
    pub fn new(center: (f64, f64), zoom: f64, zoom_speed: f64, min_zoom: f64) -> Self {
        let zoom = zoom.max(min_zoom);
        Self {
            center_x: center.0,
            center_y: center.1,
            zoom_log: zoom.ln() / zoom_speed.ln(),
            zoom_speed,
            min_zoom,
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(
            config.initial_center,
            config.initial_zoom,
            config.zoom_speed,
            config.min_zoom,
        )
    }

    pub fn center(&self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    pub fn zoom(&self) -> f64 {
        self.zoom_speed.powf(self.zoom_log)
    }

    /// Zoom exponent: `zoom = zoom_speed ^ zoom_log`.
    pub fn zoom_log(&self) -> f64 {
        self.zoom_log
    }

    pub fn zoom_speed(&self) -> f64 {
        self.zoom_speed
    }

    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::new(self.center_x, self.center_y, self.zoom())
    }

    /// Translate the center by a pixel delta.
    pub fn apply_pan(&mut self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            warn!("ignoring non-finite pan ({}, {})", dx, dy);
            return;
        }
        self.center_x += dx;
        self.center_y += dy;
    }

    /// Step the zoom in (`amount > 0`) or out (`amount < 0`) by one
    /// `zoom_speed` factor, keeping the anchor fixed.
    ///
    /// `anchor_dx`/`anchor_dy` locate the anchor relative to the center, as
    /// produced by [`Camera::anchor_offset`]: screen y points down, hence the
    /// opposite sign on the y update.
    pub fn apply_zoom(&mut self, amount: f64, anchor_dx: f64, anchor_dy: f64) {
        if amount == 0.0 || amount.is_nan() {
            return;
        }
        if !anchor_dx.is_finite() || !anchor_dy.is_finite() {
            warn!("ignoring zoom with non-finite anchor ({}, {})", anchor_dx, anchor_dy);
            return;
        }

        if amount > 0.0 {
            self.zoom_log += 1.0;
            let k = self.zoom_speed - 1.0;
            self.center_x -= k * anchor_dx;
            self.center_y += k * anchor_dy;
        } else {
            if self.zoom() / self.zoom_speed < self.min_zoom {
                debug!("zoom out ignored at minimum zoom {}", self.min_zoom);
                return;
            }
            self.zoom_log -= 1.0;
            let k = 1.0 - 1.0 / self.zoom_speed;
            self.center_x += k * anchor_dx;
            self.center_y -= k * anchor_dy;
        }
    }

    /// Offset of a screen-space anchor (device pixels, y down, origin top-left)
    /// from the camera center, in the frame `apply_zoom` expects.
    pub fn anchor_offset(&self, anchor: (f64, f64), canvas_size: (u32, u32)) -> (f64, f64) {
        let half_width = canvas_size.0 as f64 / 2.0;
        let half_height = canvas_size.1 as f64 / 2.0;
        (
            anchor.0 - half_width - self.center_x,
            anchor.1 - half_height + self.center_y,
        )
    }

    /// Zoom one step keeping the plane point under `anchor` fixed.
    pub fn zoom_at(&mut self, amount: f64, anchor: (f64, f64), canvas_size: (u32, u32)) {
        let (dx, dy) = self.anchor_offset(anchor, canvas_size);
        self.apply_zoom(amount, dx, dy);
    }

    /// Set zoom directly. The center is rescaled with it so the plane point
    /// at the center reference stays put. Values below `min_zoom` clamp.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_infinite() {
            warn!("ignoring infinite zoom");
            return;
        }
        let zoom = if zoom >= self.min_zoom {
            zoom
        } else {
            warn!("zoom {} clamped to minimum {}", zoom, self.min_zoom);
            self.min_zoom
        };

        let ratio = zoom / self.zoom();
        self.zoom_log = zoom.ln() / self.zoom_speed.ln();
        self.center_x *= ratio;
        self.center_y *= ratio;
    }

    pub fn set_center_x(&mut self, value: f64) {
        if value.is_finite() {
            self.center_x = value;
        }
    }

    pub fn set_center_y(&mut self, value: f64) {
        if value.is_finite() {
            self.center_y = value;
        }
    }

    /// Center expressed in plane units (`center / zoom`).
    pub fn plane_center(&self) -> (f64, f64) {
        let zoom = self.zoom();
        (self.center_x / zoom, self.center_y / zoom)
    }

    pub fn set_plane_center_x(&mut self, value: f64) {
        self.set_center_x(value * self.zoom());
    }

    pub fn set_plane_center_y(&mut self, value: f64) {
        self.set_center_y(value * self.zoom());
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&ExplorerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new((0.0, 0.0), 300.0, 1.1, 1.0)
    }

    #[test]
    fn initial_zoom_is_reproduced() {
        let cam = camera();
        assert!((cam.zoom() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn pan_adds_delta() {
        let mut cam = camera();
        cam.apply_pan(12.0, -4.0);
        cam.apply_pan(1.0, 1.0);
        assert_eq!(cam.center(), (13.0, -3.0));
    }

    #[test]
    fn pan_ignores_non_finite() {
        let mut cam = camera();
        cam.apply_pan(f64::NAN, 1.0);
        assert_eq!(cam.center(), (0.0, 0.0));
    }

    #[test]
    fn zero_amount_is_noop() {
        let mut cam = camera();
        let before = cam.clone();
        cam.apply_zoom(0.0, 50.0, 50.0);
        assert_eq!(cam, before);
    }

    #[test]
    fn zoom_in_multiplies_by_speed() {
        let mut cam = camera();
        cam.apply_zoom(1.0, 0.0, 0.0);
        assert!((cam.zoom() - 330.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_in_moves_center_toward_anchor() {
        let mut cam = camera();
        cam.apply_zoom(3.0, 100.0, 40.0);
        let (cx, cy) = cam.center();
        assert!((cx - (-10.0)).abs() < 1e-9);
        assert!((cy - 4.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_out_divides_by_speed() {
        let mut cam = camera();
        cam.apply_zoom(-1.0, 110.0, -22.0);
        assert!((cam.zoom() - 300.0 / 1.1).abs() < 1e-9);
        let k = 1.0 - 1.0 / 1.1;
        let (cx, cy) = cam.center();
        assert!((cx - k * 110.0).abs() < 1e-9);
        assert!((cy - k * 22.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_out_stops_at_minimum() {
        let mut cam = Camera::new((0.0, 0.0), 1.05, 1.1, 1.0);
        cam.apply_zoom(-1.0, 10.0, 10.0);
        assert!((cam.zoom() - 1.05).abs() < 1e-12);
        assert_eq!(cam.center(), (0.0, 0.0));
    }

    #[test]
    fn anchor_offset_flips_y_reference() {
        let mut cam = camera();
        cam.apply_pan(10.0, 20.0);
        let (dx, dy) = cam.anchor_offset((500.0, 100.0), (800, 600));
        assert_eq!(dx, 500.0 - 400.0 - 10.0);
        assert_eq!(dy, 100.0 - 300.0 + 20.0);
    }

    #[test]
    fn set_zoom_rescales_center() {
        let mut cam = camera();
        cam.apply_pan(30.0, -60.0);
        cam.set_zoom(600.0);
        assert!((cam.zoom() - 600.0).abs() < 1e-9);
        let (cx, cy) = cam.center();
        assert!((cx - 60.0).abs() < 1e-9);
        assert!((cy + 120.0).abs() < 1e-9);
        let (px, py) = cam.plane_center();
        assert!((px - 0.1).abs() < 1e-12);
        assert!((py + 0.2).abs() < 1e-12);
    }

    #[test]
    fn set_zoom_clamps_to_minimum() {
        let mut cam = camera();
        cam.set_zoom(0.0);
        assert!((cam.zoom() - 1.0).abs() < 1e-12);
        cam.set_zoom(-20.0);
        assert!(cam.zoom() > 0.0);
        cam.set_zoom(f64::NAN);
        assert!((cam.zoom() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn plane_center_setters_scale_by_zoom() {
        let mut cam = camera();
        cam.set_plane_center_x(-0.5);
        cam.set_plane_center_y(0.25);
        assert!((cam.center().0 + 150.0).abs() < 1e-9);
        assert!((cam.center().1 - 75.0).abs() < 1e-9);
    }

    #[test]
    fn snapshot_copies_state() {
        let mut cam = camera();
        let snap = cam.snapshot();
        cam.apply_pan(5.0, 5.0);
        assert_eq!(snap.center_x, 0.0);
        assert!((snap.zoom - 300.0).abs() < 1e-9);
    }
}
