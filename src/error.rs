// src/error.rs
//! Error types for ndvec.
//!
//! Every fallible operation returns [`VectorError`] through the crate-wide
//! [`Result`] alias. Failures are raised synchronously at the offending call,
//! and no operation is partially applied: it either returns a complete new
//! value or an error, and never mutates its operands.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Failure modes of vector construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// Operand lengths are incompatible for the requested operation.
    ///
    /// Raised by the checked arithmetic operations when lengths differ, by
    /// `Vector::from_points` when the two point slices differ in length, and
    /// by the cross-product family when an operand is not 3-dimensional.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Length required by the operation.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },

    /// A magnitude argument was zero or negative where a positive length is
    /// required.
    #[error("magnitude must be positive, got {value}")]
    NonPositiveMagnitude {
        /// The offending magnitude.
        value: f64,
    },

    /// The receiver's magnitude is zero where it is needed as a divisor.
    #[error("zero-magnitude vector cannot be used as a divisor")]
    ZeroMagnitude,
}
