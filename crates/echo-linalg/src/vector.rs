// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-size vectors of 2, 3 or 4 components.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{check_index, Result};
use crate::scalar::Scalar;
use crate::tolerance::Tolerance;

/// Fixed-size vector of `N` scalar components.
///
/// * Used both as a free-standing 2/3/4-component vector and as the column
///   type of [`crate::Matrix`].
/// * `Copy` value semantics: assignment copies every component, nothing is
///   ever aliased.
/// * Component-wise operators (`+`, `-`, `*` between vectors) and scalar
///   scaling are provided; [`Vector::dot`] is the inner product.
// Components are floats, so equality is partial (NaN != NaN).
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

/// Two-component vector.
pub type Vec2<T> = Vector<T, 2>;
/// Three-component vector.
pub type Vec3<T> = Vector<T, 3>;
/// Four-component vector (homogeneous points and directions).
pub type Vec4<T> = Vector<T, 4>;

/// Two-component `f32` vector.
pub type Vec2f = Vec2<f32>;
/// Three-component `f32` vector.
pub type Vec3f = Vec3<f32>;
/// Four-component `f32` vector.
pub type Vec4f = Vec4<f32>;
/// Two-component `f64` vector.
pub type Vec2d = Vec2<f64>;
/// Three-component `f64` vector.
pub type Vec3d = Vec3<f64>;
/// Four-component `f64` vector.
pub type Vec4d = Vec4<f64>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const LEN: usize = N;

    /// Creates a vector from its components.
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    /// Borrows the components.
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Returns the zero vector.
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Returns a vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Reads component `index`.
    ///
    /// # Errors
    /// [`crate::LinalgError::IndexOutOfRange`] when `index >= N`.
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, N).map(|i| self.data[i])
    }

    /// Overwrites component `index`.
    ///
    /// # Errors
    /// [`crate::LinalgError::IndexOutOfRange`] when `index >= N`; the vector
    /// is unchanged in that case.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let i = check_index(index, N)?;
        self.data[i] = value;
        Ok(())
    }

    /// Sum of all components.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &c| acc + c)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> T {
        (*self * *other).sum()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// A zero-length vector has no direction and is returned unchanged
    /// (still zero) so callers can detect it.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == T::zero() {
            return *self;
        }
        *self / len
    }

    /// Normalises in place; see [`Vector::normalize`].
    pub fn normalize_mut(&mut self) {
        *self = self.normalize();
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).length()
    }

    /// Returns a vector with `f` applied to every component.
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self {
            data: self.data.map(&mut f),
        }
    }

    /// Applies `f` to every component in place.
    pub fn apply<F>(&mut self, mut f: F)
    where
        F: FnMut(T) -> T,
    {
        for c in &mut self.data {
            *c = f(*c);
        }
    }

    /// Component-wise approximate equality against `reference`.
    pub fn approx_eq(&self, reference: &Self, tolerance: Tolerance) -> bool {
        self.data
            .iter()
            .zip(reference.data.iter())
            .all(|(a, b)| tolerance.approx_eq(a.to_f64(), b.to_f64()))
    }

    fn zip_with<F>(self, rhs: Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        let mut out = self.data;
        for (o, r) in out.iter_mut().zip(rhs.data) {
            *o = f(*o, r);
        }
        Self { data: out }
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Creates a vector from `(x, y)`.
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> T {
        self.data[1]
    }

    /// Appends a `z` component.
    pub fn extend(self, z: T) -> Vec3<T> {
        Vector::<T, 3>::new(self.data[0], self.data[1], z)
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Creates a vector from `(x, y, z)`.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> T {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> T {
        self.data[2]
    }

    /// Appends a `w` component (`1` for points, `0` for directions).
    pub fn extend(self, w: T) -> Vec4<T> {
        Vector::<T, 4>::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Cross product with another vector (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a vector from `(x, y, z, w)`.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Concatenates two 2-component vectors into `(a.x, a.y, b.x, b.y)`.
    pub fn from_halves(a: Vec2<T>, b: Vec2<T>) -> Self {
        Self::new(a.data[0], a.data[1], b.data[0], b.data[1])
    }

    /// X component.
    pub const fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> T {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> T {
        self.data[2]
    }

    /// W component.
    pub const fn w(&self) -> T {
        self.data[3]
    }

    /// Drops the `w` component.
    pub const fn xyz(&self) -> Vec3<T> {
        Vector::<T, 3>::new(self.data[0], self.data[1], self.data[2])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self::from_array(value)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

/// Component-wise (Hadamard) product.
impl<T: Scalar, const N: usize> Mul for Vector<T, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        self.map(|c| c / rhs)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;
                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(f32, f64);

/// Space-separated components, e.g. `1 2 3`. Debug output only.
impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T, const N: usize> serde::Serialize for Vector<T, N>
where
    T: Scalar + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::serde_support::serialize_array(&self.data, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const N: usize> serde::Deserialize<'de> for Vector<T, N>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::serde_support::deserialize_array(deserializer, T::zero()).map(Self::from_array)
    }
}
