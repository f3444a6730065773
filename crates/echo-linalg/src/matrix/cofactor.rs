// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Closed-form determinant and adjugate kernels for orders 2, 3 and 4.
//!
//! Kernels operate on a row-major `f64` grid (`grid[row][col]`) so every
//! storage precision shares one implementation and determinants are always
//! evaluated in 64-bit arithmetic. Expansion is along the first row.

/// Row-major `N×N` grid of `f64` values, `grid[row][col]`.
pub type Grid<const N: usize> = [[f64; N]; N];

/// Type-level matrix order. Only `Order<2>`, `Order<3>` and `Order<4>`
/// implement [`Cofactor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order<const N: usize>;

/// Closed-form cofactor expansion for one matrix order.
pub trait Cofactor<const N: usize> {
    /// Determinant of `m`.
    fn determinant(m: &Grid<N>) -> f64;

    /// Determinant of `m` together with its adjugate (transposed cofactor
    /// matrix), sharing the minor terms between both.
    fn adjugate(m: &Grid<N>) -> (f64, Grid<N>);
}

impl Cofactor<2> for Order<2> {
    fn determinant(m: &Grid<2>) -> f64 {
        let [[a, b], [c, d]] = *m;
        a * d - b * c
    }

    fn adjugate(m: &Grid<2>) -> (f64, Grid<2>) {
        let [[a, b], [c, d]] = *m;
        (a * d - b * c, [[d, -b], [-c, a]])
    }
}

impl Cofactor<3> for Order<3> {
    fn determinant(m: &Grid<3>) -> f64 {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = *m;
        m00 * (m11 * m22 - m12 * m21) - m01 * (m10 * m22 - m12 * m20)
            + m02 * (m10 * m21 - m11 * m20)
    }

    fn adjugate(m: &Grid<3>) -> (f64, Grid<3>) {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = *m;

        let r00 = m11 * m22 - m12 * m21;
        let r10 = -(m10 * m22 - m12 * m20);
        let r20 = m10 * m21 - m11 * m20;

        let det = m00 * r00 + m01 * r10 + m02 * r20;

        let adj = [
            [r00, -(m01 * m22 - m02 * m21), m01 * m12 - m02 * m11],
            [r10, m00 * m22 - m02 * m20, -(m00 * m12 - m02 * m10)],
            [r20, -(m00 * m21 - m01 * m20), m00 * m11 - m01 * m10],
        ];
        (det, adj)
    }
}

/// The six 2×2 minors of rows 2 and 3; `c{i}{j}` pairs columns `i` and `j`.
struct BottomMinors {
    c23: f64,
    c13: f64,
    c12: f64,
    c03: f64,
    c02: f64,
    c01: f64,
}

impl BottomMinors {
    fn of(m: &Grid<4>) -> Self {
        let [_, _, [m20, m21, m22, m23], [m30, m31, m32, m33]] = *m;
        Self {
            c23: m22 * m33 - m23 * m32,
            c13: m21 * m33 - m23 * m31,
            c12: m21 * m32 - m22 * m31,
            c03: m20 * m33 - m23 * m30,
            c02: m20 * m32 - m22 * m30,
            c01: m20 * m31 - m21 * m30,
        }
    }

    /// Cofactors of the first row, i.e. the first column of the adjugate.
    fn first_row_cofactors(&self, m: &Grid<4>) -> [f64; 4] {
        let [_, [m10, m11, m12, m13], _, _] = *m;
        [
            m11 * self.c23 - m12 * self.c13 + m13 * self.c12,
            -(m10 * self.c23 - m12 * self.c03 + m13 * self.c02),
            m10 * self.c13 - m11 * self.c03 + m13 * self.c01,
            -(m10 * self.c12 - m11 * self.c02 + m12 * self.c01),
        ]
    }
}

fn expand_first_row(m: &Grid<4>, cofactors: &[f64; 4]) -> f64 {
    m[0].iter().zip(cofactors).map(|(a, c)| a * c).sum()
}

impl Cofactor<4> for Order<4> {
    fn determinant(m: &Grid<4>) -> f64 {
        let bottom = BottomMinors::of(m);
        expand_first_row(m, &bottom.first_row_cofactors(m))
    }

    fn adjugate(m: &Grid<4>) -> (f64, Grid<4>) {
        let [[m00, m01, m02, m03], [m10, m11, m12, m13], [m20, m21, m22, m23], [m30, m31, m32, m33]] =
            *m;

        let bottom = BottomMinors::of(m);
        let [r00, r10, r20, r30] = bottom.first_row_cofactors(m);
        let det = expand_first_row(m, &[r00, r10, r20, r30]);

        // Minors of rows 1 and 3.
        let a2313 = m12 * m33 - m13 * m32;
        let a1313 = m11 * m33 - m13 * m31;
        let a1213 = m11 * m32 - m12 * m31;
        let a0313 = m10 * m33 - m13 * m30;
        let a0213 = m10 * m32 - m12 * m30;
        let a0113 = m10 * m31 - m11 * m30;

        // Minors of rows 1 and 2.
        let a2312 = m12 * m23 - m13 * m22;
        let a1312 = m11 * m23 - m13 * m21;
        let a1212 = m11 * m22 - m12 * m21;
        let a0312 = m10 * m23 - m13 * m20;
        let a0212 = m10 * m22 - m12 * m20;
        let a0112 = m10 * m21 - m11 * m20;

        let BottomMinors {
            c23,
            c13,
            c12,
            c03,
            c02,
            c01,
        } = bottom;

        let adj = [
            [
                r00,
                -(m01 * c23 - m02 * c13 + m03 * c12),
                m01 * a2313 - m02 * a1313 + m03 * a1213,
                -(m01 * a2312 - m02 * a1312 + m03 * a1212),
            ],
            [
                r10,
                m00 * c23 - m02 * c03 + m03 * c02,
                -(m00 * a2313 - m02 * a0313 + m03 * a0213),
                m00 * a2312 - m02 * a0312 + m03 * a0212,
            ],
            [
                r20,
                -(m00 * c13 - m01 * c03 + m03 * c01),
                m00 * a1313 - m01 * a0313 + m03 * a0113,
                -(m00 * a1312 - m01 * a0312 + m03 * a0112),
            ],
            [
                r30,
                m00 * c12 - m01 * c02 + m02 * c01,
                -(m00 * a1213 - m01 * a0213 + m02 * a0113),
                m00 * a1212 - m01 * a0212 + m02 * a0112,
            ],
        ];
        (det, adj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product<const N: usize>(a: &Grid<N>, b: &Grid<N>) -> Grid<N> {
        let mut out = [[0.0; N]; N];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..N).map(|k| a[i][k] * b[k][j]).sum();
            }
        }
        out
    }

    fn assert_scaled_identity<const N: usize>(m: &Grid<N>, det: f64) {
        for (i, row) in m.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                let expected = if i == j { det } else { 0.0 };
                assert!(
                    (v - expected).abs() <= 1e-9,
                    "[{i}][{j}] = {v}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn order2_scaled_identity() {
        let m = [[2.0, 0.0], [0.0, 2.0]];
        assert_eq!(Order::<2>::determinant(&m), 4.0);
        let (det, adj) = Order::<2>::adjugate(&m);
        assert_eq!(det, 4.0);
        assert_eq!(adj, [[2.0, 0.0], [0.0, 2.0]]);
    }

    #[test]
    fn order3_adjugate_times_matrix_is_det_identity() {
        let m = [[2.0, -1.0, 0.0], [1.0, 3.0, 4.0], [0.5, 0.0, -2.0]];
        let (det, adj) = Order::<3>::adjugate(&m);
        assert!((det - Order::<3>::determinant(&m)).abs() <= 1e-12);
        assert_scaled_identity(&product(&m, &adj), det);
    }

    #[test]
    fn order4_known_determinant() {
        // Upper-triangular: determinant is the diagonal product.
        let m = [
            [2.0, 7.0, -1.0, 3.0],
            [0.0, 3.0, 5.0, 1.0],
            [0.0, 0.0, 4.0, 9.0],
            [0.0, 0.0, 0.0, 0.5],
        ];
        assert_eq!(Order::<4>::determinant(&m), 12.0);
    }

    #[test]
    fn order4_adjugate_times_matrix_is_det_identity() {
        let m = [
            [1.0, 2.0, 0.0, -1.0],
            [3.0, 0.5, 2.0, 0.0],
            [0.0, -1.0, 4.0, 2.0],
            [1.0, 0.0, 1.0, 3.0],
        ];
        let (det, adj) = Order::<4>::adjugate(&m);
        assert!((det - Order::<4>::determinant(&m)).abs() <= 1e-12);
        assert!(det != 0.0);
        assert_scaled_identity(&product(&m, &adj), det);
        assert_scaled_identity(&product(&adj, &m), det);
    }
}
