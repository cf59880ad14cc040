//! Input events as plain values.
//!
//! The host page forwards DOM events in this shape (usually as JSON). Pointer,
//! wheel and touch positions are CSS pixels relative to the canvas' top-left
//! corner; `Resize` carries the new backing-store size in device pixels.

use serde::{Deserialize, Serialize};

/// Primary mouse button as reported by `MouseEvent.button`.
pub const PRIMARY_BUTTON: i16 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Keys the explorer responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Plus,
    Minus,
}

impl Key {
    /// Map a `KeyboardEvent.key` value. Unhandled keys give `None`.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    PointerDown { x: f64, y: f64, button: i16 },
    PointerMove { x: f64, y: f64 },
    PointerUp { button: i16 },
    Wheel { delta_y: f64, x: f64, y: f64 },
    TouchStart { touches: Vec<TouchPoint> },
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd,
    Key { key: Key },
    Resize { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_map() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_key_name("PageDown"), Some(Key::PageDown));
        assert_eq!(Key::from_key_name("+"), Some(Key::Plus));
        assert_eq!(Key::from_key_name("Escape"), None);
    }

    #[test]
    fn wheel_event_from_json() {
        let json = r#"{"type":"Wheel","delta_y":-120.0,"x":10.0,"y":20.0}"#;
        let event: InputEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            InputEvent::Wheel {
                delta_y: -120.0,
                x: 10.0,
                y: 20.0
            }
        );
    }

    #[test]
    fn touch_event_from_json() {
        let json = r#"{"type":"TouchMove","touches":[{"x":1.0,"y":2.0},{"x":3.0,"y":4.0}]}"#;
        let event: InputEvent = serde_json::from_str(json).unwrap();
        match event {
            InputEvent::TouchMove { touches } => assert_eq!(touches.len(), 2),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn key_event_from_json() {
        let event: InputEvent = serde_json::from_str(r#"{"type":"Key","key":"PageUp"}"#).unwrap();
        assert_eq!(event, InputEvent::Key { key: Key::PageUp });
    }
}
