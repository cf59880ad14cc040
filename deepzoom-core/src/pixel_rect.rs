use serde::{Deserialize, Serialize};

/// Rectangle in output-buffer pixel space (rows top-down, always u32 coordinates)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Create new pixel rectangle
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole canvas
    pub fn full(canvas_size: (u32, u32)) -> Self {
        Self::new(0, 0, canvas_size.0, canvas_size.1)
    }

    /// Calculate area in pixels
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if point is inside rectangle
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px - self.x < self.width && py >= self.y && py - self.y < self.height
    }

    /// Whether the rectangle lies entirely inside a canvas of the given size
    pub fn fits_within(&self, canvas_size: (u32, u32)) -> bool {
        self.x as u64 + self.width as u64 <= canvas_size.0 as u64
            && self.y as u64 + self.height as u64 <= canvas_size.1 as u64
    }

    /// Split a canvas into tiles of at most `tile_size` square, closest to the
    /// canvas center first.
    pub fn tiles(canvas_size: (u32, u32), tile_size: u32) -> Vec<PixelRect> {
        let (width, height) = canvas_size;
        let tile_size = tile_size.max(1);
        let mut tiles = Vec::new();

        for y_start in (0..height).step_by(tile_size as usize) {
            for x_start in (0..width).step_by(tile_size as usize) {
                let w = tile_size.min(width - x_start);
                let h = tile_size.min(height - y_start);
                tiles.push(PixelRect::new(x_start, y_start, w, h));
            }
        }

        let canvas_center = (width as f64 / 2.0, height as f64 / 2.0);
        let distance_sq = |rect: &PixelRect| {
            let cx = rect.x as f64 + rect.width as f64 / 2.0;
            let cy = rect.y as f64 + rect.height as f64 / 2.0;
            (cx - canvas_center.0).powi(2) + (cy - canvas_center.1).powi(2)
        };
        tiles.sort_by(|a, b| distance_sq(a).total_cmp(&distance_sq(b)));

        tiles
    }
}
