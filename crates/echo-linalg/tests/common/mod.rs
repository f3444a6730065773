// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use echo_linalg::{Matrix, Scalar, Tolerance, Vector};

/// Tolerance for results computed in `f64`.
pub const TOL_F64: Tolerance = Tolerance::new(1e-9, 1e-9);

/// Tolerance for results stored in `f32`.
pub const TOL_F32: Tolerance = Tolerance::new(1e-5, 1e-5);

pub fn assert_vec_approx<T: Scalar, const N: usize>(
    actual: Vector<T, N>,
    expected: Vector<T, N>,
    tol: Tolerance,
) {
    assert!(
        actual.approx_eq(&expected, tol),
        "vector mismatch: {actual} vs {expected} (tol={tol:?})"
    );
}

pub fn assert_mat_approx<T: Scalar, const N: usize>(
    actual: &Matrix<T, N>,
    expected: &Matrix<T, N>,
    tol: Tolerance,
) {
    assert!(
        actual.approx_eq(expected, tol),
        "matrix mismatch: {actual} vs {expected} (tol={tol:?})"
    );
}

/// A well-conditioned 4×4 with non-trivial entries in every position.
pub fn sample_mat4() -> Matrix<f64, 4> {
    Matrix::from_rows([
        Vector::from_array([1.0, 2.0, 0.0, -1.0]),
        Vector::from_array([3.0, 0.5, 2.0, 0.0]),
        Vector::from_array([0.0, -1.0, 4.0, 2.0]),
        Vector::from_array([1.0, 0.0, 1.0, 3.0]),
    ])
}
