pub mod bindings;
pub mod gesture;
pub mod input;
pub mod readout;
pub mod redraw;
pub mod session;

pub use bindings::Explorer;
pub use gesture::{touch_distance, touch_midpoint, CameraCommand, GestureTranslator};
pub use input::{InputEvent, Key, TouchPoint, PRIMARY_BUTTON};
pub use readout::{apply_edit, format_readout_value, Readout, ReadoutEdit, MIN_EDITED_ZOOM};
pub use redraw::{FrameRequest, RedrawScheduler};
pub use session::ExplorerSession;

use wasm_bindgen::prelude::*;

/// Entry point for the page: panic hook and console logging.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}
