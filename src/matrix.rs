//! Matrices.
//!
//! All matrices are stored row-major, so `m[i][j]` is the entry in row `i`
//! and column `j`, and vectors are multiplied as columns from the right.
//! Transforms compose right to left: applying `c * b * a` to a vector
//! applies `a` first.

mod inverse;

use crate::vector::{Vector2, Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    array, fmt,
    ops::{Index, IndexMut},
};

/// A 2x2 matrix.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix2 {
    m: [[f32; 2]; 2],
}

/// A 3x3 matrix.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix3 {
    m: [[f32; 3]; 3],
}

/// A 4x4 matrix.
///
/// Multiplying with a [`Vector3`] treats the vector as a point with `w = 1`,
/// so the translation in the last column is applied. Use a [`Matrix3`] to
/// transform directions.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    m: [[f32; 4]; 4],
}

fn identity_rows<const N: usize>() -> [[f32; N]; N] {
    let mut m = [[0.0; N]; N];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    m
}

fn transposed_rows<const N: usize>(m: &[[f32; N]; N]) -> [[f32; N]; N] {
    array::from_fn(|i| array::from_fn(|j| m[j][i]))
}

fn product_rows<const N: usize>(a: &[[f32; N]; N], b: &[[f32; N]; N]) -> [[f32; N]; N] {
    array::from_fn(|i| array::from_fn(|j| (0..N).map(|k| a[i][k] * b[k][j]).sum()))
}

fn apply_rows<const N: usize>(m: &[[f32; N]; N], v: [f32; N]) -> [f32; N] {
    array::from_fn(|i| m[i].iter().zip(v).map(|(a, b)| a * b).sum())
}

fn zip_rows<const N: usize>(
    a: &[[f32; N]; N],
    b: &[[f32; N]; N],
    f: impl Fn(f32, f32) -> f32,
) -> [[f32; N]; N] {
    array::from_fn(|i| array::from_fn(|j| f(a[i][j], b[i][j])))
}

/// Copies the overlapping top-left block of `m` into an identity matrix of
/// size `N`. Shrinking truncates and growing pads with identity.
fn resized_rows<const M: usize, const N: usize>(m: &[[f32; M]; M]) -> [[f32; N]; N] {
    let mut resized = identity_rows::<N>();
    for (row, source_row) in resized.iter_mut().zip(m) {
        for (value, &source_value) in row.iter_mut().zip(source_row) {
            *value = source_value;
        }
    }
    resized
}

macro_rules! impl_square_matrix {
    ($t:ident, $v:ident, $n:literal) => {
        impl $t {
            /// Creates the identity matrix.
            #[inline]
            pub fn identity() -> Self {
                Self {
                    m: identity_rows(),
                }
            }

            /// Creates a matrix with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self { m: [[0.0; $n]; $n] }
            }

            /// Creates a matrix from an array of rows.
            #[inline]
            pub const fn from_rows_array(m: [[f32; $n]; $n]) -> Self {
                Self { m }
            }

            /// Creates a diagonal matrix with the given diagonal entries.
            pub fn from_diagonal(diagonal: &$v) -> Self {
                let mut matrix = Self::zeros();
                for (i, value) in diagonal.components().into_iter().enumerate() {
                    matrix.m[i][i] = value;
                }
                matrix
            }

            /// The rows of the matrix as arrays.
            #[inline]
            pub const fn to_rows_array(&self) -> [[f32; $n]; $n] {
                self.m
            }

            /// All entries in row-major order.
            #[inline]
            pub fn entries(&self) -> &[f32] {
                bytemuck::cast_slice(self.m.as_slice())
            }

            /// Resets the matrix to the identity matrix.
            #[inline]
            pub fn set_identity(&mut self) -> &mut Self {
                *self = Self::identity();
                self
            }

            /// Sets all entries to zero.
            #[inline]
            pub fn set_zero(&mut self) -> &mut Self {
                *self = Self::zeros();
                self
            }

            /// Transposes the matrix in place.
            #[inline]
            pub fn transpose(&mut self) -> &mut Self {
                self.m = transposed_rows(&self.m);
                self
            }

            /// Returns the transpose of this matrix.
            #[inline]
            pub fn transposed(&self) -> Self {
                Self {
                    m: transposed_rows(&self.m),
                }
            }

            /// Returns the row with the given index.
            ///
            /// # Panics
            /// If the index is outside the matrix.
            #[inline]
            pub fn row(&self, i: usize) -> $v {
                $v::from(self.m[i])
            }

            /// Overwrites the row with the given index.
            ///
            /// # Panics
            /// If the index is outside the matrix.
            #[inline]
            pub fn set_row(&mut self, i: usize, row: &$v) -> &mut Self {
                self.m[i] = row.components();
                self
            }

            /// Returns the column with the given index.
            ///
            /// # Panics
            /// If the index is outside the matrix.
            #[inline]
            pub fn column(&self, j: usize) -> $v {
                $v::from(array::from_fn(|i| self.m[i][j]))
            }

            /// Overwrites the column with the given index.
            ///
            /// # Panics
            /// If the index is outside the matrix.
            pub fn set_column(&mut self, j: usize, column: &$v) -> &mut Self {
                for (row, value) in self.m.iter_mut().zip(column.components()) {
                    row[j] = value;
                }
                self
            }

            /// Returns the entry in row `i` and column `j`.
            ///
            /// # Panics
            /// If either index is outside the matrix.
            #[inline]
            pub fn element(&self, i: usize, j: usize) -> f32 {
                self.m[i][j]
            }

            /// Returns a mutable reference to the entry in row `i` and column
            /// `j`.
            ///
            /// # Panics
            /// If either index is outside the matrix.
            #[inline]
            pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
                &mut self.m[i][j]
            }

            /// Returns the diagonal entries.
            #[inline]
            pub fn diagonal(&self) -> $v {
                $v::from(array::from_fn(|i| self.m[i][i]))
            }

            /// Returns a matrix with the given closure applied to each entry.
            #[inline]
            pub fn mapped(&self, f: impl Fn(f32) -> f32) -> Self {
                Self {
                    m: self.m.map(|row| row.map(&f)),
                }
            }
        }

        impl Default for $t {
            #[inline]
            fn default() -> Self {
                Self::identity()
            }
        }

        impl Index<usize> for $t {
            type Output = [f32; $n];

            /// # Panics
            /// If the row index is outside the matrix.
            #[inline]
            fn index(&self, i: usize) -> &Self::Output {
                &self.m[i]
            }
        }

        impl IndexMut<usize> for $t {
            /// # Panics
            /// If the row index is outside the matrix.
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut Self::Output {
                &mut self.m[i]
            }
        }

        impl From<[[f32; $n]; $n]> for $t {
            #[inline]
            fn from(m: [[f32; $n]; $n]) -> Self {
                Self { m }
            }
        }

        impl_binop!(Mul, mul, $t, $t, $t, |a, b| {
            $t {
                m: product_rows(&a.m, &b.m),
            }
        });

        impl_binop!(Mul, mul, $t, $v, $v, |a, b| {
            $v::from(apply_rows(&a.m, b.components()))
        });

        impl_binop!(Mul, mul, $t, f32, $t, |a, b| { a.mapped(|e| e * *b) });

        impl_binop!(Mul, mul, f32, $t, $t, |a, b| { b.mapped(|e| *a * e) });

        impl_binop!(Div, div, $t, f32, $t, |a, b| { a.mapped(|e| e / *b) });

        impl_binop!(Add, add, $t, $t, $t, |a, b| {
            $t {
                m: zip_rows(&a.m, &b.m, |x, y| x + y),
            }
        });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| {
            $t {
                m: zip_rows(&a.m, &b.m, |x, y| x - y),
            }
        });

        impl_unary_op!(Neg, neg, $t, $t, |val| { val.mapped(|e| -e) });

        impl_binop_assign!(MulAssign, mul_assign, $t, $t, |a, b| {
            *a = *a * b;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, f32, |a, b| {
            *a = *a * b;
        });

        impl_binop_assign!(DivAssign, div_assign, $t, f32, |a, b| {
            *a = *a / b;
        });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            *a = *a + b;
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, $t, |a, b| {
            *a = *a - b;
        });

        impl_approx_eq_componentwise!($t, entries);

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for (i, row) in self.m.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "[ ")?;
                    for (j, value) in row.iter().enumerate() {
                        if j > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{value}")?;
                    }
                    write!(f, " ]")?;
                }
                Ok(())
            }
        }
    };
}

impl_square_matrix!(Matrix2, Vector2, 2);
impl_square_matrix!(Matrix3, Vector3, 3);
impl_square_matrix!(Matrix4, Vector4, 4);

impl Matrix2 {
    /// Creates a matrix with the given entries, listed row by row.
    #[inline]
    pub const fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self {
            m: [[m00, m01], [m10, m11]],
        }
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(row0: &Vector2, row1: &Vector2) -> Self {
        Self {
            m: [row0.components(), row1.components()],
        }
    }

    /// The first row.
    #[inline]
    pub fn x_axis(&self) -> Vector2 {
        self.row(0)
    }

    /// The second row.
    #[inline]
    pub fn y_axis(&self) -> Vector2 {
        self.row(1)
    }
}

impl Matrix3 {
    /// Creates a matrix with the given entries, listed row by row.
    #[inline]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m20: f32,
        m21: f32,
        m22: f32,
    ) -> Self {
        Self {
            m: [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]],
        }
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(row0: &Vector3, row1: &Vector3, row2: &Vector3) -> Self {
        Self {
            m: [row0.components(), row1.components(), row2.components()],
        }
    }

    /// The first row.
    #[inline]
    pub fn x_axis(&self) -> Vector3 {
        self.row(0)
    }

    /// The second row.
    #[inline]
    pub fn y_axis(&self) -> Vector3 {
        self.row(1)
    }

    /// The third row.
    #[inline]
    pub fn z_axis(&self) -> Vector3 {
        self.row(2)
    }
}

impl Matrix4 {
    /// Creates a matrix with the given entries, listed row by row.
    #[inline]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m03: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m20: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m30: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self {
            m: [
                [m00, m01, m02, m03],
                [m10, m11, m12, m13],
                [m20, m21, m22, m23],
                [m30, m31, m32, m33],
            ],
        }
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(
        row0: &Vector4,
        row1: &Vector4,
        row2: &Vector4,
        row3: &Vector4,
    ) -> Self {
        Self {
            m: [
                row0.components(),
                row1.components(),
                row2.components(),
                row3.components(),
            ],
        }
    }

    /// The spatial part of the first row.
    #[inline]
    pub fn x_axis(&self) -> Vector3 {
        self.row(0).xyz()
    }

    /// The spatial part of the second row.
    #[inline]
    pub fn y_axis(&self) -> Vector3 {
        self.row(1).xyz()
    }

    /// The spatial part of the third row.
    #[inline]
    pub fn z_axis(&self) -> Vector3 {
        self.row(2).xyz()
    }
}

impl_binop!(Mul, mul, Matrix4, Vector3, Vector3, |a, b| {
    (a * Vector4::from(*b)).xyz()
});

macro_rules! impl_resize {
    ($from:ident => $to:ident) => {
        impl From<$from> for $to {
            #[inline]
            fn from(matrix: $from) -> Self {
                Self {
                    m: resized_rows(&matrix.m),
                }
            }
        }
    };
}

impl_resize!(Matrix2 => Matrix3);
impl_resize!(Matrix2 => Matrix4);
impl_resize!(Matrix3 => Matrix2);
impl_resize!(Matrix3 => Matrix4);
impl_resize!(Matrix4 => Matrix2);
impl_resize!(Matrix4 => Matrix3);

// glam stores matrices by column, so the conversions transpose.
macro_rules! impl_glam_conversion {
    ($t:ident, $glam:ty) => {
        impl From<$glam> for $t {
            #[inline]
            fn from(matrix: $glam) -> Self {
                Self {
                    m: transposed_rows(&matrix.to_cols_array_2d()),
                }
            }
        }

        impl From<$t> for $glam {
            #[inline]
            fn from(matrix: $t) -> Self {
                Self::from_cols_array_2d(&transposed_rows(&matrix.m))
            }
        }
    };
}

impl_glam_conversion!(Matrix2, glam::Mat2);
impl_glam_conversion!(Matrix3, glam::Mat3);
impl_glam_conversion!(Matrix4, glam::Mat4);
