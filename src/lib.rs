//! Fixed-size vectors and matrices for geometric transforms.
//!
//! Matrices are stored row-major and multiply column vectors from the
//! right. Numerical failures degrade silently: inverting a singular matrix
//! gives the identity matrix, and dividing by zero gives IEEE infinities or
//! NaN. The `try_` methods report the degenerate cases as [`MathError`]
//! instead.

#[macro_use]
mod macros;

pub mod error;
pub mod matrix;
pub mod transform;
pub mod vector;

pub use error::MathError;
pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use vector::{Cross, Dot, Vector2, Vector3, Vector4};
