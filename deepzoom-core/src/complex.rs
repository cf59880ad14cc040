//! Complex numbers over the two evaluation precisions.
//!
//! `OrbitScalar` abstracts the arithmetic the escape-time iteration needs so
//! a single generic evaluator serves both the native (f32) tier and the
//! split-limb tier with no runtime dispatch inside the pixel loop.

use crate::SplitFloat;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Real scalar usable for orbit iteration.
pub trait OrbitScalar:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Encode an f64 host value at this precision.
    fn from_f64(value: f64) -> Self;

    /// Widen to f64 for comparisons and output.
    fn to_f64(self) -> f64;

    /// False for NaN or infinite values.
    fn is_finite(self) -> bool;

    /// Square of the value.
    #[inline]
    fn square(self) -> Self {
        self * self
    }

    /// Twice the value.
    #[inline]
    fn double(self) -> Self {
        self + self
    }
}

impl OrbitScalar for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl OrbitScalar for SplitFloat {
    const ZERO: Self = SplitFloat::ZERO;

    #[inline]
    fn from_f64(value: f64) -> Self {
        SplitFloat::split(value)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        SplitFloat::to_f64(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        SplitFloat::is_finite(self)
    }

    #[inline]
    fn square(self) -> Self {
        SplitFloat::square(self)
    }

    #[inline]
    fn double(self) -> Self {
        self.scale_pow2(2.0)
    }
}

/// Complex number with components of precision `T`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// Native-precision complex (single f32 per component).
pub type NativeComplex = Complex<f32>;

/// Split-precision complex (two f32 limbs per component).
pub type SplitComplex = Complex<SplitFloat>;

impl<T: OrbitScalar> Complex<T> {
    pub const ZERO: Self = Self {
        re: T::ZERO,
        im: T::ZERO,
    };

    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Encode an f64 pair at this precision.
    pub fn from_f64_pair(re: f64, im: f64) -> Self {
        Self {
            re: T::from_f64(re),
            im: T::from_f64(im),
        }
    }

    pub fn to_f64_pair(&self) -> (f64, f64) {
        (self.re.to_f64(), self.im.to_f64())
    }

    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    /// z² = (re² − im²) + 2·re·im·i
    #[inline]
    pub fn square(&self) -> Self {
        Self {
            re: self.re.square() - self.im.square(),
            im: (self.re * self.im).double(),
        }
    }

    /// |z|² evaluated in f64 from the widened components.
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        let (re, im) = self.to_f64_pair();
        re * re + im * im
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}
