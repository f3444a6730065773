// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Square matrices of order 2, 3 and 4.

mod affine;
pub mod cofactor;

use core::fmt;
use core::ops::{Index, IndexMut, Mul, MulAssign};

use tracing::debug;

use crate::error::{check_index, LinalgError, Result};
use crate::scalar::Scalar;
use crate::tolerance::Tolerance;
use crate::vector::{Vec2, Vec3, Vec4, Vector};

use cofactor::{Cofactor, Grid, Order};

/// Column‑major `N×N` matrix.
///
/// - Stored as `N` column vectors; element `(row, col)` is `cols[col][row]`.
/// - Always exactly `N` columns of exactly `N` components; there is no
///   partially initialised state.
/// - `Copy` value semantics. Mutating methods (`transpose`, `invert`,
///   `translate`, ...) change only the receiver; each has a pure counterpart
///   returning a new matrix.
///
/// Matrices compose through multiplication only; there is deliberately no
/// matrix `+`/`-`.
///
/// # Examples
/// ```
/// use echo_linalg::{Mat2, Vec2};
/// let mut m = Mat2::from_cols([Vec2::new(2.0_f64, 0.0), Vec2::new(0.0, 2.0)]);
/// assert_eq!(m.determinant(), 4.0);
/// m.invert().unwrap();
/// assert_eq!(m, Mat2::from_cols([Vec2::new(0.5, 0.0), Vec2::new(0.0, 0.5)]));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix<T, const N: usize> {
    cols: [Vector<T, N>; N],
}

/// 2×2 matrix.
pub type Mat2<T> = Matrix<T, 2>;
/// 3×3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// 4×4 matrix (affine transforms).
pub type Mat4<T> = Matrix<T, 4>;

/// 2×2 `f32` matrix.
pub type Mat2f = Mat2<f32>;
/// 3×3 `f32` matrix.
pub type Mat3f = Mat3<f32>;
/// 4×4 `f32` matrix.
pub type Mat4f = Mat4<f32>;
/// 2×2 `f64` matrix.
pub type Mat2d = Mat2<f64>;
/// 3×3 `f64` matrix.
pub type Mat3d = Mat3<f64>;
/// 4×4 `f64` matrix.
pub type Mat4d = Mat4<f64>;

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Matrix order (number of rows and of columns).
    pub const ORDER: usize = N;

    /// Returns the zero matrix.
    pub fn zero() -> Self {
        Self {
            cols: [Vector::zero(); N],
        }
    }

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for (i, col) in m.cols.iter_mut().enumerate() {
            col[i] = T::one();
        }
        m
    }

    /// Creates a matrix from its columns.
    pub const fn from_cols(cols: [Vector<T, N>; N]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from its rows; storage stays column-major.
    pub fn from_rows(rows: [Vector<T, N>; N]) -> Self {
        Self::from_cols(rows).transposed()
    }

    /// Borrows the columns.
    pub const fn as_cols(&self) -> &[Vector<T, N>; N] {
        &self.cols
    }

    /// Returns the columns.
    pub fn to_cols(self) -> [Vector<T, N>; N] {
        self.cols
    }

    /// Returns a copy of column `index`.
    ///
    /// # Errors
    /// [`LinalgError::IndexOutOfRange`] when `index >= N`.
    pub fn col(&self, index: usize) -> Result<Vector<T, N>> {
        check_index(index, N).map(|i| self.cols[i])
    }

    /// Returns row `index` gathered across all columns.
    ///
    /// # Errors
    /// [`LinalgError::IndexOutOfRange`] when `index >= N`.
    pub fn row(&self, index: usize) -> Result<Vector<T, N>> {
        check_index(index, N).map(|i| self.row_at(i))
    }

    /// Reads element `(row, col)`.
    ///
    /// # Errors
    /// [`LinalgError::IndexOutOfRange`] when either index is `>= N`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let row = check_index(row, N)?;
        let col = check_index(col, N)?;
        Ok(self.cols[col][row])
    }

    /// Overwrites element `(row, col)`.
    ///
    /// # Errors
    /// [`LinalgError::IndexOutOfRange`] when either index is `>= N`; the
    /// matrix is unchanged in that case.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let row = check_index(row, N)?;
        let col = check_index(col, N)?;
        self.cols[col][row] = value;
        Ok(())
    }

    /// Replaces column `index` with `column`.
    ///
    /// # Errors
    /// [`LinalgError::IndexOutOfRange`] when `index >= N`.
    pub fn set_col(&mut self, index: usize, column: Vector<T, N>) -> Result<()> {
        let i = check_index(index, N)?;
        self.cols[i] = column;
        Ok(())
    }

    /// Overwrites every element with the corresponding element of `other`.
    pub fn copy_from(&mut self, other: &Self) {
        self.cols = other.cols;
    }

    /// Transposes in place.
    pub fn transpose(&mut self) {
        for i in 0..N {
            for j in (i + 1)..N {
                let upper = self.cols[j][i];
                self.cols[j][i] = self.cols[i][j];
                self.cols[i][j] = upper;
            }
        }
    }

    /// Returns the transpose.
    pub fn transposed(&self) -> Self {
        let mut m = *self;
        m.transpose();
        m
    }

    /// Returns a matrix with `f` applied to every element.
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self {
            cols: self.cols.map(|c| c.map(&mut f)),
        }
    }

    /// Applies `f` to every element in place.
    pub fn apply<F>(&mut self, mut f: F)
    where
        F: FnMut(T) -> T,
    {
        for col in &mut self.cols {
            col.apply(&mut f);
        }
    }

    /// Element-wise approximate equality against `reference`.
    pub fn approx_eq(&self, reference: &Self, tolerance: Tolerance) -> bool {
        self.cols
            .iter()
            .zip(reference.cols.iter())
            .all(|(a, b)| a.approx_eq(b, tolerance))
    }

    fn row_at(&self, row: usize) -> Vector<T, N> {
        Vector::from_array(self.cols.map(|c| c[row]))
    }

    fn to_grid(self) -> Grid<N> {
        let mut grid = [[0.0; N]; N];
        for (c, col) in self.cols.iter().enumerate() {
            for (r, row) in grid.iter_mut().enumerate() {
                row[c] = col[r].to_f64();
            }
        }
        grid
    }

    fn multiply(&self, rhs: &Self) -> Self {
        let mut out = Self::zero();
        for (j, out_col) in out.cols.iter_mut().enumerate() {
            for i in 0..N {
                let mut sum = T::zero();
                for (k, col) in self.cols.iter().enumerate() {
                    sum += col[i] * rhs.cols[j][k];
                }
                out_col[i] = sum;
            }
        }
        out
    }

    fn from_grid(grid: &Grid<N>, scale: f64) -> Self {
        let mut m = Self::zero();
        for (c, col) in m.cols.iter_mut().enumerate() {
            for (r, row) in grid.iter().enumerate() {
                col[r] = T::from_f64(row[c] * scale);
            }
        }
        m
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N>
where
    Order<N>: Cofactor<N>,
{
    /// Determinant, evaluated in `f64` whatever the storage precision.
    pub fn determinant(&self) -> f64 {
        Order::<N>::determinant(&self.to_grid())
    }

    /// Returns the inverse (adjugate divided by the determinant).
    ///
    /// The singular check is an exact comparison against zero; nearly
    /// singular matrices invert to very large or non-finite values.
    ///
    /// # Errors
    /// [`LinalgError::SingularMatrix`] when the determinant is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn inverse(&self) -> Result<Self> {
        let (det, adj) = Order::<N>::adjugate(&self.to_grid());
        if det == 0.0 {
            debug!(order = N, determinant = det, "refusing to invert singular matrix");
            return Err(LinalgError::SingularMatrix);
        }
        Ok(Self::from_grid(&adj, 1.0 / det))
    }

    /// Inverts in place.
    ///
    /// # Errors
    /// [`LinalgError::SingularMatrix`] when the determinant is exactly zero;
    /// the matrix is left unmodified.
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }
}

impl<T: Scalar> Matrix<T, 2> {
    /// Widens to 3×3: `self` fills the top-left block, `last` becomes the
    /// third column and the new bottom row of the first two columns is zero.
    pub fn extend(self, last: Vec3<T>) -> Matrix<T, 3> {
        let [c0, c1] = self.cols;
        Matrix::from_cols([c0.extend(T::zero()), c1.extend(T::zero()), last])
    }
}

impl<T: Scalar> Matrix<T, 3> {
    /// Widens to 4×4: `self` fills the top-left block, `last` becomes the
    /// fourth column and the new bottom row of the first three columns is zero.
    pub fn extend(self, last: Vec4<T>) -> Matrix<T, 4> {
        let [c0, c1, c2] = self.cols;
        Matrix::from_cols([
            c0.extend(T::zero()),
            c1.extend(T::zero()),
            c2.extend(T::zero()),
            last,
        ])
    }
}

impl<T: Scalar> Matrix<T, 4> {
    /// Assembles a 4×4 from four 2×2 quadrants.
    pub fn from_blocks(
        top_left: Matrix<T, 2>,
        top_right: Matrix<T, 2>,
        bottom_left: Matrix<T, 2>,
        bottom_right: Matrix<T, 2>,
    ) -> Self {
        let stack = |top: Vec2<T>, bottom: Vec2<T>| Vec4::from_halves(top, bottom);
        Self::from_cols([
            stack(top_left.cols[0], bottom_left.cols[0]),
            stack(top_left.cols[1], bottom_left.cols[1]),
            stack(top_right.cols[0], bottom_right.cols[0]),
            stack(top_right.cols[1], bottom_right.cols[1]),
        ])
    }
}

macro_rules! impl_to_array {
    ($($n:literal => $len:literal),+ $(,)?) => {
        $(
            impl<T: Scalar> Matrix<T, $n> {
                /// Returns the elements as a column‑major array.
                pub fn to_array(self) -> [T; $len] {
                    let mut out = [T::zero(); $len];
                    for (c, col) in self.cols.iter().enumerate() {
                        out[c * $n..(c + 1) * $n].copy_from_slice(col.as_array());
                    }
                    out
                }
            }
        )+
    };
}

impl_to_array!(2 => 4, 3 => 9, 4 => 16);

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Column access: `m[col]`. Panics when `col >= N`; see [`Matrix::col`].
impl<T, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = Vector<T, N>;

    fn index(&self, col: usize) -> &Vector<T, N> {
        &self.cols[col]
    }
}

impl<T, const N: usize> IndexMut<usize> for Matrix<T, N> {
    fn index_mut(&mut self, col: usize) -> &mut Vector<T, N> {
        &mut self.cols[col]
    }
}

/// Element access: `m[(row, col)]`. Panics when either index is `>= N`; see
/// [`Matrix::get`].
impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cols[col][row]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cols[col][row]
    }
}

/// Component `i` of the result is row `i` dotted with `rhs`.
impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Vector<T, N> {
        let mut out = Vector::zero();
        for i in 0..N {
            out[i] = self.row_at(i).dot(&rhs);
        }
        out
    }
}

impl<T: Scalar, const N: usize> Mul<&Self> for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self {
        self.multiply(rhs)
    }
}

impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar, const N: usize> MulAssign<&Self> for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}

/// Rows separated by ` ; `, e.g. `[1 0 ; 0 1]`. Debug output only.
impl<T: Scalar, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for r in 0..N {
            if r > 0 {
                f.write_str(" ; ")?;
            }
            write!(f, "{}", self.row_at(r))?;
        }
        f.write_str("]")
    }
}

#[cfg(feature = "serde")]
impl<T, const N: usize> serde::Serialize for Matrix<T, N>
where
    T: Scalar + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::serde_support::serialize_array(&self.cols, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for Matrix<T, N>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::serde_support::deserialize_array(deserializer, Vector::zero()).map(Self::from_cols)
    }
}
