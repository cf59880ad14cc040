//! Escape-time evaluation with period-based early exit.
//!
//! The orbit first runs a stabilization phase with escape checks only. A second,
//! shorter phase additionally sums the step-to-step displacement; once that sum
//! settles below a zoom-scaled tolerance the orbit is taken as periodic and the
//! sample exits early as interior.

use deepzoom_core::{Complex, EscapeResult, ExplorerConfig, OrbitScalar};

/// Per-pass iteration parameters, fixed for every sample of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EscapeParams {
    pub stabilization_budget: u32,
    pub period_budget: u32,
    pub escape_radius: f64,
    pub convergence_tolerance: f64,
}

impl EscapeParams {
    /// Parameters for a frame drawn at `zoom`. Tolerance shrinks as zoom grows.
    pub fn for_zoom(config: &ExplorerConfig, zoom: f64) -> Self {
        Self {
            stabilization_budget: config.stabilization_iterations,
            period_budget: config.period_iterations,
            escape_radius: config.escape_radius,
            convergence_tolerance: config.tolerance_scale / zoom,
        }
    }

    pub fn max_iterations(&self) -> u32 {
        self.stabilization_budget.saturating_add(self.period_budget)
    }
}

/// Iterate `z = z² + c` from zero and classify the orbit.
///
/// Iteration counts use the 0-based step index: an escape found while
/// computing step `i` reports `i`, a periodic exit reports the offset into
/// the period-finding phase, and an exhausted orbit reports the period budget.
pub fn evaluate<T: OrbitScalar>(c: Complex<T>, params: &EscapeParams) -> EscapeResult {
    let max_iterations = params.max_iterations();
    if !c.is_finite() {
        return EscapeResult::escaped(0, max_iterations);
    }

    let radius_sq = params.escape_radius * params.escape_radius;
    let tolerance_sq = params.convergence_tolerance * params.convergence_tolerance;
    let mut z = Complex::<T>::ZERO;

    for i in 0..params.stabilization_budget {
        z = z.square().add(&c);
        if escaped(&z, radius_sq) {
            return EscapeResult::escaped(i, max_iterations);
        }
    }

    let mut dz = Complex::<T>::ZERO;
    for step in 0..params.period_budget {
        let next = z.square().add(&c);
        dz = dz.add(&next.sub(&z));
        z = next;

        if escaped(&z, radius_sq) {
            return EscapeResult::escaped(params.stabilization_budget + step, max_iterations);
        }
        if dz.norm_sq() < tolerance_sq {
            return EscapeResult::periodic(step, max_iterations);
        }
    }

    EscapeResult::exhausted(params.period_budget, max_iterations)
}

// NaN norms count as escaped so a diverged orbit never reads as interior.
#[inline]
fn escaped<T: OrbitScalar>(z: &Complex<T>, radius_sq: f64) -> bool {
    let norm_sq = z.norm_sq();
    norm_sq > radius_sq || norm_sq.is_nan()
}
