//! Errors reported by the checked operations.

use thiserror::Error;

/// Failure of a checked operation whose unchecked counterpart degrades
/// silently.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum MathError {
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f32 },
    #[error("vector of length {length} cannot be normalized")]
    DegenerateVector { length: f32 },
}
