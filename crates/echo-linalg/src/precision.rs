// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Conversions between the 32-bit and 64-bit instantiations.
//!
//! - [`Widen`] is lossless (`f32` → `f64`) and also backs the `From` impls.
//! - [`Narrow`] is explicit and lossy (`f64` → `f32`, round to nearest).
//! - Mixed-precision operators widen the 32-bit operand before operating, so
//!   each operation runs in a single precision and yields `f64`.
//!
//! Because `Matrix<f64, N>` accepts both precisions on the right of `*`, a
//! generic constructor used as an operand needs a concrete precision:
//! `m * Mat4d::identity()` or `m * Mat4::<f64>::identity()`, not
//! `m * Mat4::identity()`.

use core::ops::{Add, Mul, Sub};

use crate::matrix::Matrix;
use crate::vector::Vector;

/// Lossless conversion to the 64-bit instantiation.
pub trait Widen {
    /// The 64-bit counterpart.
    type Output;

    /// Converts without losing any bits.
    fn widen(self) -> Self::Output;
}

/// Explicit, lossy conversion to the 32-bit instantiation.
pub trait Narrow {
    /// The 32-bit counterpart.
    type Output;

    /// Converts, rounding every component to the nearest `f32`.
    fn narrow(self) -> Self::Output;
}

impl Widen for f32 {
    type Output = f64;

    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Narrow for f64 {
    type Output = f32;

    #[allow(clippy::cast_possible_truncation)]
    fn narrow(self) -> f32 {
        self as f32
    }
}

impl<const N: usize> Widen for Vector<f32, N> {
    type Output = Vector<f64, N>;

    fn widen(self) -> Vector<f64, N> {
        Vector::from_array(self.to_array().map(Widen::widen))
    }
}

impl<const N: usize> Narrow for Vector<f64, N> {
    type Output = Vector<f32, N>;

    fn narrow(self) -> Vector<f32, N> {
        Vector::from_array(self.to_array().map(Narrow::narrow))
    }
}

impl<const N: usize> Widen for Matrix<f32, N> {
    type Output = Matrix<f64, N>;

    fn widen(self) -> Matrix<f64, N> {
        Matrix::from_cols(self.to_cols().map(Widen::widen))
    }
}

impl<const N: usize> Narrow for Matrix<f64, N> {
    type Output = Matrix<f32, N>;

    fn narrow(self) -> Matrix<f32, N> {
        Matrix::from_cols(self.to_cols().map(Narrow::narrow))
    }
}

impl<const N: usize> From<Vector<f32, N>> for Vector<f64, N> {
    fn from(value: Vector<f32, N>) -> Self {
        value.widen()
    }
}

impl<const N: usize> From<Matrix<f32, N>> for Matrix<f64, N> {
    fn from(value: Matrix<f32, N>) -> Self {
        value.widen()
    }
}

macro_rules! impl_mixed_binop {
    ($trait:ident, $method:ident, $lhs:ident, $rhs:ident => $out:ident) => {
        impl<const N: usize> $trait<$rhs<f64, N>> for $lhs<f32, N> {
            type Output = $out<f64, N>;

            fn $method(self, rhs: $rhs<f64, N>) -> $out<f64, N> {
                self.widen().$method(rhs)
            }
        }

        impl<const N: usize> $trait<$rhs<f32, N>> for $lhs<f64, N> {
            type Output = $out<f64, N>;

            fn $method(self, rhs: $rhs<f32, N>) -> $out<f64, N> {
                self.$method(rhs.widen())
            }
        }
    };
}

impl_mixed_binop!(Add, add, Vector, Vector => Vector);
impl_mixed_binop!(Sub, sub, Vector, Vector => Vector);
impl_mixed_binop!(Mul, mul, Vector, Vector => Vector);
impl_mixed_binop!(Mul, mul, Matrix, Matrix => Matrix);
impl_mixed_binop!(Mul, mul, Matrix, Vector => Vector);
