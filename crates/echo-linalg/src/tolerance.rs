// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Approximate comparison policy.

/// Absolute/relative error budget used by the `approx_eq` helpers.
///
/// Two values `a` and `b` compare equal when
/// `|a - b| <= max(absolute, relative * |b|)`, where `b` is the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Floor applied regardless of magnitude.
    pub absolute: f64,
    /// Error allowed per unit of reference magnitude.
    pub relative: f64,
}

impl Tolerance {
    /// Default absolute error budget.
    pub const DEFAULT_ABSOLUTE: f64 = 1e-6;

    /// Default relative error budget.
    pub const DEFAULT_RELATIVE: f64 = 1e-6;

    /// Creates a tolerance from explicit absolute and relative budgets.
    pub const fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    /// Largest difference accepted against `reference`.
    pub fn allowed_error(&self, reference: f64) -> f64 {
        self.absolute.max(self.relative * reference.abs())
    }

    /// Returns `true` when `value` is within budget of `reference`.
    ///
    /// Non-finite inputs only compare equal when they are bit-for-bit
    /// identical infinities; NaN never compares equal.
    pub fn approx_eq(&self, value: f64, reference: f64) -> bool {
        if value.is_infinite() || reference.is_infinite() {
            return value == reference;
        }
        (value - reference).abs() <= self.allowed_error(reference)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ABSOLUTE, Self::DEFAULT_RELATIVE)
    }
}
