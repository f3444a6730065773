// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-linalg: fixed-size vectors and square matrices for graphics and
//! geometry code.
//!
//! - [`Vector`] holds 2, 3 or 4 components; [`Matrix`] is a column-major
//!   square matrix of order 2, 3 or 4.
//! - Both are generic over [`Scalar`], implemented for `f32` and `f64`;
//!   aliases such as [`Vec3f`] and [`Mat4d`] name the common instantiations.
//! - Determinants and inverses use closed-form cofactor expansion evaluated in
//!   `f64`. Inverting a singular matrix reports
//!   [`LinalgError::SingularMatrix`] and leaves the matrix untouched.
//! - 4×4 matrices carry affine helpers (`translate`, `scale`, `rotate`) that
//!   post-multiply the receiver.
//! - [`Widen`] and [`Narrow`] bridge the two precisions; mixed-precision
//!   arithmetic always produces the 64-bit type.
//!
//! Enable the `serde` feature for `Serialize`/`Deserialize` on both types.
#![forbid(unsafe_code)]

mod error;
pub mod matrix;
mod precision;
mod scalar;
#[cfg(feature = "serde")]
mod serde_support;
mod tolerance;
mod vector;

pub use error::{LinalgError, Result};
pub use matrix::{Mat2, Mat2d, Mat2f, Mat3, Mat3d, Mat3f, Mat4, Mat4d, Mat4f, Matrix};
pub use precision::{Narrow, Widen};
pub use scalar::Scalar;
pub use tolerance::Tolerance;
pub use vector::{Vec2, Vec2d, Vec2f, Vec3, Vec3d, Vec3f, Vec4, Vec4d, Vec4f, Vector};
