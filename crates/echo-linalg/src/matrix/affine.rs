// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use super::Matrix;
use crate::scalar::Scalar;
use crate::vector::Vec3;

/// Affine composition on 4×4 matrices.
///
/// Each mutating helper post-multiplies the receiver by an elementary
/// transform (`self = self * T`), so the transform applied last in call order
/// acts first on points. Pure variants (`translated`, `scaled`, `rotated`)
/// leave the receiver untouched.
///
/// # Examples
/// ```
/// use echo_linalg::{Mat4, Vec3, Vec4};
/// let mut m = Mat4::<f64>::identity();
/// m.translate(Vec3::new(1.0, 2.0, 3.0));
/// assert_eq!(m * Vec4::<f64>::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
/// ```
impl<T: Scalar> Matrix<T, 4> {
    /// Builds a translation matrix.
    pub fn from_translation(offset: Vec3<T>) -> Self {
        Self::identity().translated(offset)
    }

    /// Builds a non-uniform scale matrix.
    pub fn from_scale(factors: Vec3<T>) -> Self {
        Self::identity().scaled(factors)
    }

    /// Builds a rotation of `angle` radians about `axis`.
    pub fn from_axis_angle(angle: T, axis: Vec3<T>) -> Self {
        Self::identity().rotated(angle, axis)
    }

    /// Appends a translation expressed in the matrix's own basis:
    /// `col3 = col0·x + col1·y + col2·z + col3`.
    pub fn translate(&mut self, offset: Vec3<T>) {
        let [c0, c1, c2, c3] = self.cols;
        self.cols[3] = c0 * offset.x() + c1 * offset.y() + c2 * offset.z() + c3;
    }

    /// Scales columns 0, 1 and 2 by `factors.x`, `factors.y` and `factors.z`.
    pub fn scale(&mut self, factors: Vec3<T>) {
        self.cols[0] *= factors.x();
        self.cols[1] *= factors.y();
        self.cols[2] *= factors.z();
    }

    /// Appends a rotation of `angle` radians about `axis` (right-hand rule).
    ///
    /// The axis is normalised first. A zero-length axis has no direction, so
    /// the matrix is left unchanged. Column 3 is never modified.
    pub fn rotate(&mut self, angle: T, axis: Vec3<T>) {
        let axis = axis.normalize();
        if axis == Vec3::zero() {
            trace!("rotate called with zero-length axis; leaving matrix unchanged");
            return;
        }

        let (s, c) = angle.sin_cos();
        let [x, y, z] = axis.to_array();
        let [tx, ty, tz] = (axis * (T::one() - c)).to_array();

        // Rodrigues rotation, stored column-major.
        let r0 = Vec3::new(c + tx * x, tx * y + s * z, tx * z - s * y);
        let r1 = Vec3::new(ty * x - s * z, c + ty * y, ty * z + s * x);
        let r2 = Vec3::new(tz * x + s * y, tz * y - s * x, c + tz * z);

        let [c0, c1, c2, c3] = self.cols;
        let combine = |r: Vec3<T>| c0 * r.x() + c1 * r.y() + c2 * r.z();
        self.cols = [combine(r0), combine(r1), combine(r2), c3];
    }

    /// Returns `self` with a translation appended; see [`Matrix::translate`].
    pub fn translated(&self, offset: Vec3<T>) -> Self {
        let mut m = *self;
        m.translate(offset);
        m
    }

    /// Returns `self` with a scale appended; see [`Matrix::scale`].
    pub fn scaled(&self, factors: Vec3<T>) -> Self {
        let mut m = *self;
        m.scale(factors);
        m
    }

    /// Returns `self` with a rotation appended; see [`Matrix::rotate`].
    pub fn rotated(&self, angle: T, axis: Vec3<T>) -> Self {
        let mut m = *self;
        m.rotate(angle, axis);
        m
    }

    /// Transforms a point (`w = 1`, no perspective divide).
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        (*self * point.extend(T::one())).xyz()
    }

    /// Transforms a direction (`w = 0`); translation does not apply.
    pub fn transform_direction(&self, direction: Vec3<T>) -> Vec3<T> {
        (*self * direction.extend(T::zero())).xyz()
    }
}
