// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar arithmetic abstraction for the fixed-size linear algebra types.
//!
//! This trait provides the minimal numeric surface that [`crate::Vector`] and
//! [`crate::Matrix`] are written against, so a single generic type serves both
//! storage precisions instead of one hand-written type per precision.
//!
//! Scope:
//! - Core arithmetic: add, sub, mul, div, neg (and the assigning forms).
//! - Square root, absolute value, sine and cosine (angles in radians).
//! - A round trip through `f64`, used by the determinant and inverse kernels
//!   which always evaluate in 64-bit precision.
//!
//! Transcendentals are routed through `libm` so results do not depend on the
//! platform's intrinsic implementations.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Floating-point scalar usable as a vector or matrix component.
///
/// Implemented for `f32` and `f64`. Arithmetic operators are required via the
/// standard operator traits so generic code can use `+`, `-`, `*`, `/` and
/// unary `-` directly.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Returns the square root of `self`.
    fn sqrt(self) -> Self;

    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;

    /// Returns the sine of `self` (radians).
    fn sin(self) -> Self;

    /// Returns the cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Returns both sine and cosine of `self` (radians).
    ///
    /// Default implementation computes `sin` and `cos` separately.
    fn sin_cos(self) -> (Self, Self) {
        (Self::sin(self), Self::cos(self))
    }

    /// Converts `value` into this scalar type.
    ///
    /// Lossless for `f64`; rounds to the nearest representable value for `f32`.
    fn from_f64(value: f64) -> Self;

    /// Converts this scalar to `f64`. Always lossless.
    fn to_f64(self) -> f64;
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    fn abs(self) -> Self {
        libm::fabsf(self)
    }

    fn sin(self) -> Self {
        libm::sinf(self)
    }

    fn cos(self) -> Self {
        libm::cosf(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn abs(self) -> Self {
        libm::fabs(self)
    }

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}
