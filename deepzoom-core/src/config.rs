//! Explorer configuration.
//!
//! Holds the camera defaults, iteration budgets and precision tiers. Loaded
//! once at startup (defaults or JSON) and validated before use.

use crate::{default_tiers, ConfigError, PrecisionTier, TierTable};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Camera center at startup, in pixel units.
    pub initial_center: (f64, f64),
    /// Zoom at startup (pixels per plane unit).
    pub initial_zoom: f64,
    /// Factor applied per zoom step. Must exceed 1.
    pub zoom_speed: f64,
    /// Smallest allowed zoom.
    pub min_zoom: f64,
    /// Keyboard pan step in device pixels.
    pub move_speed: f64,
    /// Change in two-finger distance (CSS px) needed before a pinch zooms.
    pub pinch_threshold: f64,
    /// Iterations spent assuming escape before period finding starts.
    pub stabilization_iterations: u32,
    /// Iterations spent looking for a converged orbit.
    pub period_iterations: u32,
    /// Bound on |z|.
    pub escape_radius: f64,
    /// Convergence tolerance is `tolerance_scale / zoom`.
    pub tolerance_scale: f64,
    /// Trailing debounce window for redraws; 0 redraws on the next tick.
    pub redraw_debounce_ms: f64,
    /// Zoom-keyed precision tiers.
    pub tiers: Vec<PrecisionTier>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            initial_center: (0.0, 0.0),
            initial_zoom: 300.0,
            zoom_speed: 1.1,
            min_zoom: 1.0,
            move_speed: 5.0,
            pinch_threshold: 2.0,
            stabilization_iterations: 200,
            period_iterations: 50,
            escape_radius: 2.0,
            tolerance_scale: 100.0,
            redraw_debounce_ms: 0.0,
            tiers: default_tiers(),
        }
    }
}

impl ExplorerConfig {
    /// Parse from JSON (missing fields take defaults) and validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter. Errors here are fatal at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn require(name: &'static str, value: f64, ok: bool) -> Result<(), ConfigError> {
            if ok {
                Ok(())
            } else {
                Err(ConfigError::InvalidParameter { name, value })
            }
        }

        let c = self;
        require("zoom_speed", c.zoom_speed, c.zoom_speed.is_finite() && c.zoom_speed > 1.0)?;
        require("min_zoom", c.min_zoom, c.min_zoom.is_finite() && c.min_zoom > 0.0)?;
        require(
            "initial_zoom",
            c.initial_zoom,
            c.initial_zoom.is_finite() && c.initial_zoom >= c.min_zoom,
        )?;
        require(
            "initial_center.x",
            c.initial_center.0,
            c.initial_center.0.is_finite(),
        )?;
        require(
            "initial_center.y",
            c.initial_center.1,
            c.initial_center.1.is_finite(),
        )?;
        require("move_speed", c.move_speed, c.move_speed.is_finite())?;
        require(
            "pinch_threshold",
            c.pinch_threshold,
            c.pinch_threshold.is_finite() && c.pinch_threshold >= 0.0,
        )?;
        require(
            "escape_radius",
            c.escape_radius,
            c.escape_radius.is_finite() && c.escape_radius > 0.0,
        )?;
        require(
            "tolerance_scale",
            c.tolerance_scale,
            c.tolerance_scale.is_finite() && c.tolerance_scale > 0.0,
        )?;
        require(
            "redraw_debounce_ms",
            c.redraw_debounce_ms,
            c.redraw_debounce_ms.is_finite() && c.redraw_debounce_ms >= 0.0,
        )?;
        let total = c.stabilization_iterations as u64 + c.period_iterations as u64;
        require(
            "iteration budget",
            total as f64,
            total > 0 && total <= u32::MAX as u64,
        )?;

        self.tier_table().map(|_| ())
    }

    /// Build the validated tier table.
    pub fn tier_table(&self) -> Result<TierTable, ConfigError> {
        TierTable::new(self.tiers.clone())
    }

    /// Total iteration budget reported as `max_iterations`.
    pub fn max_iterations(&self) -> u32 {
        self.stabilization_iterations
            .saturating_add(self.period_iterations)
    }
}
