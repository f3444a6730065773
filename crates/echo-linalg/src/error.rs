// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Error type shared by the vector and matrix APIs.

use thiserror::Error;

/// Errors reported by checked accessors and matrix inversion.
///
/// Both variants describe a broken caller contract or a mathematical
/// impossibility; neither is transient, so callers should not retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A row, column, or component index fell outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The number of valid indices.
        len: usize,
    },

    /// Inversion was requested on a matrix whose determinant is exactly zero.
    ///
    /// The matrix is left unmodified when this is returned.
    #[error("matrix is singular: determinant is zero")]
    SingularMatrix,
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, LinalgError>;

/// Returns `Ok(index)` when `index < len`, otherwise `IndexOutOfRange`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(LinalgError::IndexOutOfRange { index, len })
    }
}
