//! Split-limb float: one f64 carried as two f32 limbs.
//!
//! Value = hi + lo, where `hi` is the value rounded to f32 and `lo` is the
//! residual. This gives ~48 bits of mantissa through channels that only carry
//! single precision (shader uniforms, f32 buffers), as long as every operation
//! on the pair is compensated. The error-free transformations below
//! (`two_sum`, `quick_two_sum`, `two_prod`) recover the rounding error of each
//! f32 operation exactly so it can be folded back into the low limb.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A real number stored as an unevaluated sum of two f32 limbs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitFloat {
    /// Value rounded to f32.
    pub hi: f32,
    /// Residual, |lo| ≤ 0.5 × ulp(hi) after normalization.
    pub lo: f32,
}

impl SplitFloat {
    /// Zero constant.
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };

    /// Split an f64 into its f32 head and the f32 residual.
    pub fn split(value: f64) -> Self {
        let hi = value as f32;
        let lo = (value - hi as f64) as f32;
        Self { hi, lo }
    }

    /// Exact embedding of an f32 (residual zero).
    pub fn from_f32(value: f32) -> Self {
        Self { hi: value, lo: 0.0 }
    }

    /// Recombine the limbs in f64.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.hi as f64 + self.lo as f64
    }

    /// Both limbs finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.hi.is_finite() && self.lo.is_finite()
    }

    /// Compensated square, cheaper than `self * self`.
    #[inline]
    pub fn square(self) -> Self {
        let (p, e) = two_prod(self.hi, self.hi);
        let e = e + 2.0 * self.hi * self.lo;
        let (hi, lo) = quick_two_sum(p, e);
        Self { hi, lo }
    }

    /// Multiply by a power of two. Exact, both limbs scale together.
    #[inline]
    pub fn scale_pow2(self, factor: f32) -> Self {
        Self {
            hi: self.hi * factor,
            lo: self.lo * factor,
        }
    }
}

impl From<f64> for SplitFloat {
    fn from(value: f64) -> Self {
        Self::split(value)
    }
}

impl Add for SplitFloat {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        let (s, e) = two_sum(self.hi, other.hi);
        let (t, f) = two_sum(self.lo, other.lo);
        let (s, e) = quick_two_sum(s, e + t);
        let (hi, lo) = quick_two_sum(s, e + f);
        Self { hi, lo }
    }
}

impl Neg for SplitFloat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Sub for SplitFloat {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

impl Mul for SplitFloat {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        let (p, e) = two_prod(self.hi, other.hi);
        let e = e + (self.hi * other.lo + self.lo * other.hi);
        let (hi, lo) = quick_two_sum(p, e);
        Self { hi, lo }
    }
}

/// Knuth's two-sum: `s + e == a + b` exactly, with `s = fl(a + b)`.
#[inline]
pub fn two_sum(a: f32, b: f32) -> (f32, f32) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// Dekker's fast two-sum. Requires |a| ≥ |b| (or a == 0).
#[inline]
pub fn quick_two_sum(a: f32, b: f32) -> (f32, f32) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

/// Error-free product: `p + e == a * b` exactly, with `p = fl(a * b)`.
#[inline]
pub fn two_prod(a: f32, b: f32) -> (f32, f32) {
    let p = a * b;
    let e = libm::fmaf(a, b, -p);
    (p, e)
}

/// Unit in the last place of `x` (spacing to the next f32 away from zero).
pub fn ulp(x: f32) -> f32 {
    if !x.is_finite() {
        return f32::NAN;
    }
    let magnitude = x.abs();
    if magnitude == f32::MAX {
        return magnitude - f32::from_bits(magnitude.to_bits() - 1);
    }
    f32::from_bits(magnitude.to_bits() + 1) - magnitude
}
