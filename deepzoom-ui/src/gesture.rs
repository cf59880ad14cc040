//! Translation of raw input into camera commands.
//!
//! Holds only gesture state (an active drag, the pinch reference distance).
//! It never touches the camera, so every mapping is testable on its own.

use crate::input::{InputEvent, Key, TouchPoint, PRIMARY_BUTTON};

/// A camera operation derived from input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraCommand {
    /// Pan by a device-pixel delta in the camera's frame (y up).
    Pan { dx: f64, dy: f64 },
    /// Zoom one step towards (`amount > 0`) or away from a screen anchor in
    /// device pixels (y down).
    ZoomAt { amount: f64, anchor: (f64, f64) },
    /// Zoom one step anchored at the viewport center.
    ZoomCentered { amount: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureTranslator {
    device_pixel_ratio: f64,
    move_speed: f64,
    pinch_threshold: f64,
    /// Last pointer or single-touch position (CSS px) while dragging.
    drag: Option<(f64, f64)>,
    /// Distance between two touches at the last pinch step.
    pinch_distance: Option<f64>,
}

impl GestureTranslator {
    pub fn new(move_speed: f64, pinch_threshold: f64) -> Self {
        Self {
            device_pixel_ratio: 1.0,
            move_speed,
            pinch_threshold,
            drag: None,
            pinch_distance: None,
        }
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Ratios that are not finite and positive are ignored.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        if ratio.is_finite() && ratio > 0.0 {
            self.device_pixel_ratio = ratio;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Update gesture state for `event` and return the command it produces.
    pub fn translate(&mut self, event: &InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::PointerDown { x, y, button } => {
                if *button == PRIMARY_BUTTON {
                    self.drag = Some((*x, *y));
                }
                None
            }
            InputEvent::PointerMove { x, y } => self.drag_to(*x, *y),
            InputEvent::PointerUp { button } => {
                if *button == PRIMARY_BUTTON {
                    self.drag = None;
                }
                None
            }
            InputEvent::Wheel { delta_y, x, y } => {
                if *delta_y == 0.0 {
                    return None;
                }
                Some(CameraCommand::ZoomAt {
                    amount: -delta_y,
                    anchor: (x * self.device_pixel_ratio, y * self.device_pixel_ratio),
                })
            }
            InputEvent::TouchStart { touches } => {
                self.begin_touch(touches);
                None
            }
            InputEvent::TouchMove { touches } => self.touch_move(touches),
            InputEvent::TouchEnd => {
                self.drag = None;
                self.pinch_distance = None;
                None
            }
            InputEvent::Key { key } => Some(self.key_command(*key)),
            InputEvent::Resize { .. } => None,
        }
    }

    fn drag_to(&mut self, x: f64, y: f64) -> Option<CameraCommand> {
        let (last_x, last_y) = self.drag?;
        self.drag = Some((x, y));
        // Screen y grows downward, the camera's frame y upward.
        Some(CameraCommand::Pan {
            dx: (x - last_x) * self.device_pixel_ratio,
            dy: -(y - last_y) * self.device_pixel_ratio,
        })
    }

    fn begin_touch(&mut self, touches: &[TouchPoint]) {
        match touches {
            [single] => {
                self.drag = Some((single.x, single.y));
                self.pinch_distance = None;
            }
            [a, b, ..] => {
                self.drag = None;
                self.pinch_distance = Some(touch_distance(a, b));
            }
            [] => {
                self.drag = None;
                self.pinch_distance = None;
            }
        }
    }

    fn touch_move(&mut self, touches: &[TouchPoint]) -> Option<CameraCommand> {
        match touches {
            [single] => self.drag_to(single.x, single.y),
            [a, b, ..] => {
                let distance = touch_distance(a, b);
                let Some(reference) = self.pinch_distance else {
                    self.drag = None;
                    self.pinch_distance = Some(distance);
                    return None;
                };
                let delta = distance - reference;
                if delta.abs() <= self.pinch_threshold {
                    return None;
                }
                self.pinch_distance = Some(distance);
                let (mx, my) = touch_midpoint(a, b);
                Some(CameraCommand::ZoomAt {
                    amount: delta,
                    anchor: (mx * self.device_pixel_ratio, my * self.device_pixel_ratio),
                })
            }
            [] => None,
        }
    }

    fn key_command(&self, key: Key) -> CameraCommand {
        let step = self.move_speed;
        match key {
            Key::ArrowUp => CameraCommand::Pan { dx: 0.0, dy: step },
            Key::ArrowDown => CameraCommand::Pan { dx: 0.0, dy: -step },
            Key::ArrowLeft => CameraCommand::Pan { dx: -step, dy: 0.0 },
            Key::ArrowRight => CameraCommand::Pan { dx: step, dy: 0.0 },
            Key::PageUp | Key::Plus => CameraCommand::ZoomCentered { amount: 1.0 },
            Key::PageDown | Key::Minus => CameraCommand::ZoomCentered { amount: -1.0 },
        }
    }
}

pub fn touch_distance(a: &TouchPoint, b: &TouchPoint) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

pub fn touch_midpoint(a: &TouchPoint, b: &TouchPoint) -> (f64, f64) {
    ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> GestureTranslator {
        GestureTranslator::new(5.0, 2.0)
    }

    fn touches(points: &[(f64, f64)]) -> Vec<TouchPoint> {
        points.iter().map(|&(x, y)| TouchPoint::new(x, y)).collect()
    }

    #[test]
    fn drag_pans_with_y_flipped_and_scaled() {
        let mut t = translator();
        t.set_device_pixel_ratio(2.0);
        assert_eq!(
            t.translate(&InputEvent::PointerDown {
                x: 10.0,
                y: 10.0,
                button: PRIMARY_BUTTON
            }),
            None
        );
        let cmd = t.translate(&InputEvent::PointerMove { x: 15.0, y: 7.0 });
        assert_eq!(cmd, Some(CameraCommand::Pan { dx: 10.0, dy: 6.0 }));
        // Deltas are relative to the previous move.
        let cmd = t.translate(&InputEvent::PointerMove { x: 16.0, y: 7.0 });
        assert_eq!(cmd, Some(CameraCommand::Pan { dx: 2.0, dy: -0.0 }));
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut t = translator();
        assert_eq!(t.translate(&InputEvent::PointerMove { x: 1.0, y: 1.0 }), None);
    }

    #[test]
    fn secondary_button_does_not_drag() {
        let mut t = translator();
        t.translate(&InputEvent::PointerDown {
            x: 0.0,
            y: 0.0,
            button: 2,
        });
        assert!(!t.is_dragging());
    }

    #[test]
    fn pointer_up_ends_drag() {
        let mut t = translator();
        t.translate(&InputEvent::PointerDown {
            x: 0.0,
            y: 0.0,
            button: PRIMARY_BUTTON,
        });
        t.translate(&InputEvent::PointerUp {
            button: PRIMARY_BUTTON,
        });
        assert_eq!(t.translate(&InputEvent::PointerMove { x: 5.0, y: 5.0 }), None);
    }

    #[test]
    fn wheel_zooms_at_cursor() {
        let mut t = translator();
        t.set_device_pixel_ratio(1.5);
        let cmd = t.translate(&InputEvent::Wheel {
            delta_y: -100.0,
            x: 100.0,
            y: 40.0,
        });
        assert_eq!(
            cmd,
            Some(CameraCommand::ZoomAt {
                amount: 100.0,
                anchor: (150.0, 60.0)
            })
        );
    }

    #[test]
    fn zero_wheel_delta_ignored() {
        let mut t = translator();
        let cmd = t.translate(&InputEvent::Wheel {
            delta_y: 0.0,
            x: 1.0,
            y: 1.0,
        });
        assert_eq!(cmd, None);
    }

    #[test]
    fn arrow_keys_pan_by_move_speed() {
        let mut t = translator();
        let key = |k| InputEvent::Key { key: k };
        assert_eq!(
            t.translate(&key(Key::ArrowUp)),
            Some(CameraCommand::Pan { dx: 0.0, dy: 5.0 })
        );
        assert_eq!(
            t.translate(&key(Key::ArrowLeft)),
            Some(CameraCommand::Pan { dx: -5.0, dy: 0.0 })
        );
        assert_eq!(
            t.translate(&key(Key::Minus)),
            Some(CameraCommand::ZoomCentered { amount: -1.0 })
        );
    }

    #[test]
    fn single_touch_drags() {
        let mut t = translator();
        t.translate(&InputEvent::TouchStart {
            touches: touches(&[(50.0, 50.0)]),
        });
        let cmd = t.translate(&InputEvent::TouchMove {
            touches: touches(&[(47.0, 54.0)]),
        });
        assert_eq!(cmd, Some(CameraCommand::Pan { dx: -3.0, dy: -4.0 }));
        t.translate(&InputEvent::TouchEnd);
        assert!(!t.is_dragging());
    }

    #[test]
    fn pinch_below_threshold_does_nothing() {
        let mut t = translator();
        t.translate(&InputEvent::TouchStart {
            touches: touches(&[(0.0, 0.0), (100.0, 0.0)]),
        });
        let cmd = t.translate(&InputEvent::TouchMove {
            touches: touches(&[(0.0, 0.0), (101.5, 0.0)]),
        });
        assert_eq!(cmd, None);
    }

    #[test]
    fn pinch_out_zooms_in_at_midpoint() {
        let mut t = translator();
        t.set_device_pixel_ratio(2.0);
        t.translate(&InputEvent::TouchStart {
            touches: touches(&[(0.0, 0.0), (100.0, 0.0)]),
        });
        let cmd = t.translate(&InputEvent::TouchMove {
            touches: touches(&[(0.0, 0.0), (110.0, 0.0)]),
        });
        assert_eq!(
            cmd,
            Some(CameraCommand::ZoomAt {
                amount: 10.0,
                anchor: (110.0, 0.0)
            })
        );
        // The reference distance moved to 110: pinching back in zooms out.
        let cmd = t.translate(&InputEvent::TouchMove {
            touches: touches(&[(0.0, 0.0), (100.0, 0.0)]),
        });
        assert!(matches!(cmd, Some(CameraCommand::ZoomAt { amount, .. }) if amount < 0.0));
    }

    #[test]
    fn invalid_device_pixel_ratio_ignored() {
        let mut t = translator();
        t.set_device_pixel_ratio(0.0);
        t.set_device_pixel_ratio(f64::NAN);
        assert_eq!(t.device_pixel_ratio(), 1.0);
    }

    #[test]
    fn distance_and_midpoint() {
        let a = TouchPoint::new(0.0, 0.0);
        let b = TouchPoint::new(3.0, 4.0);
        assert_eq!(touch_distance(&a, &b), 5.0);
        assert_eq!(touch_midpoint(&a, &b), (1.5, 2.0));
    }
}
