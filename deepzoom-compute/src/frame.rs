//! Per-frame encoding of the view at the evaluator's precision.
//!
//! The camera works in f64. Before a pass the view is converted once into the
//! arithmetic of the active tier, and every sample point is then derived in
//! that arithmetic. Deriving `c` in f64 and narrowing afterwards would discard
//! exactly the low bits the split tier exists to keep.

use crate::evaluator::{evaluate, EscapeParams};
use deepzoom_core::{
    pixel_center, Complex, EscapeResult, EvaluatorStrategy, OrbitScalar, SplitFloat, ViewSnapshot,
};

/// View uniforms at precision `T`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms<T> {
    pub half_width: T,
    pub half_height: T,
    pub center_x: T,
    pub center_y: T,
    pub inv_zoom: T,
}

impl<T: OrbitScalar> FrameUniforms<T> {
    pub fn encode(view: &ViewSnapshot, canvas_size: (u32, u32)) -> Self {
        Self {
            half_width: T::from_f64(canvas_size.0 as f64 / 2.0),
            half_height: T::from_f64(canvas_size.1 as f64 / 2.0),
            center_x: T::from_f64(view.center_x),
            center_y: T::from_f64(view.center_y),
            inv_zoom: T::from_f64(1.0 / view.zoom),
        }
    }

    /// Plane point under a frame-space position: `(p - res/2 - center) / zoom`.
    #[inline]
    pub fn sample(&self, frame_x: f64, frame_y: f64) -> Complex<T> {
        let x = T::from_f64(frame_x);
        let y = T::from_f64(frame_y);
        Complex::new(
            (x - self.half_width - self.center_x) * self.inv_zoom,
            (y - self.half_height - self.center_y) * self.inv_zoom,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameEncoding {
    Native(FrameUniforms<f32>),
    Split(FrameUniforms<SplitFloat>),
}

impl FrameEncoding {
    pub fn new(strategy: EvaluatorStrategy, view: &ViewSnapshot, canvas_size: (u32, u32)) -> Self {
        match strategy {
            EvaluatorStrategy::NativePrecision => {
                Self::Native(FrameUniforms::encode(view, canvas_size))
            }
            EvaluatorStrategy::SplitPrecision => {
                Self::Split(FrameUniforms::encode(view, canvas_size))
            }
        }
    }

    pub fn strategy(&self) -> EvaluatorStrategy {
        match self {
            Self::Native(_) => EvaluatorStrategy::NativePrecision,
            Self::Split(_) => EvaluatorStrategy::SplitPrecision,
        }
    }

    /// Sample point at a frame position, widened to f64.
    pub fn plane_point(&self, frame_x: f64, frame_y: f64) -> (f64, f64) {
        match self {
            Self::Native(u) => u.sample(frame_x, frame_y).to_f64_pair(),
            Self::Split(u) => u.sample(frame_x, frame_y).to_f64_pair(),
        }
    }

    pub fn evaluate_at(&self, frame_x: f64, frame_y: f64, params: &EscapeParams) -> EscapeResult {
        match self {
            Self::Native(u) => evaluate(u.sample(frame_x, frame_y), params),
            Self::Split(u) => evaluate(u.sample(frame_x, frame_y), params),
        }
    }
}

/// Everything needed to evaluate any pixel of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePlan {
    pub encoding: FrameEncoding,
    pub params: EscapeParams,
    pub canvas_size: (u32, u32),
}

impl FramePlan {
    pub fn strategy(&self) -> EvaluatorStrategy {
        self.encoding.strategy()
    }

    /// Evaluate the output pixel at (`col`, `row`), rows counted top-down.
    pub fn evaluate_pixel(&self, col: u32, row: u32) -> EscapeResult {
        let (x, y) = pixel_center(col, row, self.canvas_size);
        self.encoding.evaluate_at(x, y, &self.params)
    }

    /// Sample point of the output pixel at (`col`, `row`).
    pub fn pixel_plane_point(&self, col: u32, row: u32) -> (f64, f64) {
        let (x, y) = pixel_center(col, row, self.canvas_size);
        self.encoding.plane_point(x, y)
    }
}
