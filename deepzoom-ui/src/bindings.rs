//! JavaScript-facing handle around [`ExplorerSession`].
//!
//! Events, frames and readouts cross the boundary as JSON strings so the page
//! needs no generated bindings beyond this type.

use crate::{ExplorerSession, FrameRequest, InputEvent, ReadoutEdit};
use deepzoom_core::ExplorerConfig;
use wasm_bindgen::prelude::*;

fn to_js(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen]
pub struct Explorer {
    session: ExplorerSession,
}

#[wasm_bindgen]
impl Explorer {
    /// Build from a JSON configuration (empty string for defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, width: u32, height: u32) -> Result<Explorer, JsValue> {
        let config = if config_json.trim().is_empty() {
            ExplorerConfig::default()
        } else {
            ExplorerConfig::from_json(config_json).map_err(to_js)?
        };
        let session = ExplorerSession::new(config, (width, height)).map_err(to_js)?;
        Ok(Self { session })
    }

    /// Apply one serialized [`InputEvent`]. Returns whether a redraw is pending.
    pub fn handle_event(&mut self, event_json: &str, now_ms: f64) -> Result<bool, JsValue> {
        let event: InputEvent = serde_json::from_str(event_json).map_err(to_js)?;
        Ok(self.session.handle_event(&event, now_ms))
    }

    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.session.set_device_pixel_ratio(ratio);
    }

    /// Serialized [`FrameRequest`] due at `now_ms`, if any.
    pub fn next_frame(&mut self, now_ms: f64) -> Result<Option<String>, JsValue> {
        self.session
            .next_frame(now_ms)
            .map(|frame| serde_json::to_string(&frame))
            .transpose()
            .map_err(to_js)
    }

    /// Evaluate a serialized frame here and return the results as JSON.
    pub fn render_frame(&self, frame_json: &str) -> Result<String, JsValue> {
        let frame: FrameRequest = serde_json::from_str(frame_json).map_err(to_js)?;
        let data = self.session.render(&frame).map_err(to_js)?;
        serde_json::to_string(&data).map_err(to_js)
    }

    /// Readout as JSON: `{"x", "y", "zoom", "display": [..]}`.
    pub fn readout(&self) -> Result<String, JsValue> {
        let readout = self.session.readout();
        let value = serde_json::json!({
            "x": readout.x,
            "y": readout.y,
            "zoom": readout.zoom,
            "display": readout.formatted(),
        });
        Ok(value.to_string())
    }

    /// Apply editor text to a readout field. Unparseable input is ignored.
    pub fn edit_readout(&mut self, field: &str, text: &str, now_ms: f64) -> bool {
        match ReadoutEdit::parse(field, text) {
            Some(edit) => {
                self.session.edit_readout(edit, now_ms);
                true
            }
            None => false,
        }
    }
}
