//! Mapping between frame pixels and the fractal plane.
//!
//! Frame coordinates have their origin at the bottom-left corner with y up,
//! the same convention as the plane. A pixel maps to
//! `c = (pixel - resolution/2 - center) / zoom`.

use crate::ViewSnapshot;

/// Plane point under a frame-space pixel position.
pub fn pixel_to_plane(pixel: (f64, f64), canvas_size: (u32, u32), view: &ViewSnapshot) -> (f64, f64) {
    let (width, height) = canvas_size;
    (
        (pixel.0 - width as f64 / 2.0 - view.center_x) / view.zoom,
        (pixel.1 - height as f64 / 2.0 - view.center_y) / view.zoom,
    )
}

/// Frame-space pixel position of a plane point. Inverse of [`pixel_to_plane`].
pub fn plane_to_pixel(point: (f64, f64), canvas_size: (u32, u32), view: &ViewSnapshot) -> (f64, f64) {
    let (width, height) = canvas_size;
    (
        point.0 * view.zoom + width as f64 / 2.0 + view.center_x,
        point.1 * view.zoom + height as f64 / 2.0 + view.center_y,
    )
}

/// Frame-space sample position for the center of the pixel at (`col`, `row`)
/// of a top-down output buffer.
pub fn pixel_center(col: u32, row: u32, canvas_size: (u32, u32)) -> (f64, f64) {
    (col as f64 + 0.5, canvas_size.1 as f64 - row as f64 - 0.5)
}

/// Convert a screen position (y down) to frame coordinates (y up).
pub fn screen_to_frame(screen: (f64, f64), canvas_size: (u32, u32)) -> (f64, f64) {
    (screen.0, canvas_size.1 as f64 - screen.1)
}
