//! Determinants, adjugates and inverses.
//!
//! Singular matrices invert to the identity matrix. The `try_inverted`
//! methods report them as [`MathError::SingularMatrix`] instead.

use super::{Matrix2, Matrix3, Matrix4, identity_rows};
use crate::error::MathError;
use std::array;

/// Sign of the cofactor for the given position: positive when `row + col` is
/// even.
#[inline]
fn cofactor_sign(row: usize, col: usize) -> f32 {
    if (row + col) % 2 == 0 { 1.0 } else { -1.0 }
}

/// Copies `m` with the given row and column removed. `M` must be `N - 1`.
fn minor_rows<const N: usize, const M: usize>(
    m: &[[f32; N]; N],
    row: usize,
    col: usize,
) -> [[f32; M]; M] {
    assert!(
        row < N && col < N,
        "minor index ({row}, {col}) outside {N}x{N} matrix"
    );
    debug_assert_eq!(M + 1, N);
    array::from_fn(|i| {
        let i = if i < row { i } else { i + 1 };
        array::from_fn(|j| {
            let j = if j < col { j } else { j + 1 };
            m[i][j]
        })
    })
}

macro_rules! impl_fallback_inverse {
    ($t:ident) => {
        impl $t {
            /// Returns the inverse of this matrix, or the identity matrix if
            /// this matrix is singular.
            pub fn inverted(&self) -> Self {
                self.try_inverted().unwrap_or_else(|err| {
                    log::trace!("Inverting {} gave identity: {err}", stringify!($t));
                    Self::identity()
                })
            }

            /// Inverts the matrix in place. A singular matrix becomes the
            /// identity matrix.
            #[inline]
            pub fn invert(&mut self) -> &mut Self {
                *self = self.inverted();
                self
            }
        }
    };
}

impl_fallback_inverse!(Matrix2);
impl_fallback_inverse!(Matrix3);
impl_fallback_inverse!(Matrix4);

impl Matrix2 {
    /// Computes the determinant of this matrix.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * m[1][1] - m[1][0] * m[0][1]
    }

    /// Computes the adjugate (transposed cofactor matrix) of this matrix.
    #[inline]
    pub fn adjugate(&self) -> Self {
        let m = &self.m;
        Self::new(m[1][1], -m[0][1], -m[1][0], m[0][0])
    }

    /// Computes the inverse of this matrix as its adjugate divided by its
    /// determinant.
    ///
    /// # Errors
    /// Returns [`MathError::SingularMatrix`] if the magnitude of the
    /// determinant is below machine epsilon.
    pub fn try_inverted(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        if determinant.abs() < f32::EPSILON {
            return Err(MathError::SingularMatrix { determinant });
        }
        Ok(self.adjugate() / determinant)
    }
}

impl Matrix3 {
    /// Returns the 2x2 matrix obtained by removing the given row and column.
    ///
    /// # Panics
    /// If either index is outside the matrix.
    #[inline]
    pub fn minor(&self, row: usize, col: usize) -> Matrix2 {
        Matrix2 {
            m: minor_rows(&self.m, row, col),
        }
    }

    /// Computes the signed minor determinant for the given position.
    ///
    /// # Panics
    /// If either index is outside the matrix.
    #[inline]
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        cofactor_sign(row, col) * self.minor(row, col).determinant()
    }

    /// Computes the determinant of this matrix by cofactor expansion along
    /// the first row.
    pub fn determinant(&self) -> f32 {
        (0..3).map(|j| self.m[0][j] * self.cofactor(0, j)).sum()
    }

    /// Computes the adjugate (transposed cofactor matrix) of this matrix.
    pub fn adjugate(&self) -> Self {
        Self {
            m: array::from_fn(|i| array::from_fn(|j| self.cofactor(j, i))),
        }
    }

    /// Computes the inverse of this matrix as its adjugate divided by its
    /// determinant.
    ///
    /// # Errors
    /// Returns [`MathError::SingularMatrix`] if the magnitude of the
    /// determinant is below machine epsilon.
    pub fn try_inverted(&self) -> Result<Self, MathError> {
        let determinant = self.determinant();
        if determinant.abs() < f32::EPSILON {
            return Err(MathError::SingularMatrix { determinant });
        }
        Ok(self.adjugate() / determinant)
    }
}

impl Matrix4 {
    /// Returns the 3x3 matrix obtained by removing the given row and column.
    ///
    /// # Panics
    /// If either index is outside the matrix.
    #[inline]
    pub fn minor(&self, row: usize, col: usize) -> Matrix3 {
        Matrix3 {
            m: minor_rows(&self.m, row, col),
        }
    }

    /// Computes the signed minor determinant for the given position.
    ///
    /// # Panics
    /// If either index is outside the matrix.
    #[inline]
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        cofactor_sign(row, col) * self.minor(row, col).determinant()
    }

    /// Computes the determinant of this matrix by cofactor expansion along
    /// the first row.
    pub fn determinant(&self) -> f32 {
        (0..4).map(|j| self.m[0][j] * self.cofactor(0, j)).sum()
    }

    /// Computes the adjugate (transposed cofactor matrix) of this matrix.
    pub fn adjugate(&self) -> Self {
        Self {
            m: array::from_fn(|i| array::from_fn(|j| self.cofactor(j, i))),
        }
    }

    /// Computes the inverse of this matrix by Gauss-Jordan elimination with
    /// partial pivoting.
    ///
    /// # Errors
    /// Returns [`MathError::SingularMatrix`] if the largest available pivot
    /// in some column has a magnitude below machine epsilon. The reported
    /// determinant is the cofactor determinant.
    pub fn try_inverted(&self) -> Result<Self, MathError> {
        self.gauss_jordan_inverse()
            .map(|(inverse, _)| inverse)
            .ok_or_else(|| MathError::SingularMatrix {
                determinant: self.determinant(),
            })
    }

    /// Reduces a working copy of the matrix to the identity while applying
    /// the same row operations to an identity accumulator, which ends up
    /// holding the inverse. Also returns the determinant given by the
    /// product of the pivots, negated for each row swap.
    fn gauss_jordan_inverse(&self) -> Option<(Self, f32)> {
        let mut work = self.m;
        let mut inverse = identity_rows::<4>();
        let mut determinant = 1.0;

        for c in 0..4 {
            let pivot_row = (c + 1..4).fold(c, |best, r| {
                if work[r][c].abs() > work[best][c].abs() {
                    r
                } else {
                    best
                }
            });

            let pivot = work[pivot_row][c];
            if pivot.abs() < f32::EPSILON {
                return None;
            }

            if pivot_row != c {
                work.swap(pivot_row, c);
                inverse.swap(pivot_row, c);
                determinant = -determinant;
            }
            determinant *= pivot;

            work[c] = work[c].map(|value| value / pivot);
            inverse[c] = inverse[c].map(|value| value / pivot);

            let (pivot_work_row, pivot_inverse_row) = (work[c], inverse[c]);
            for r in (0..4).filter(|&r| r != c) {
                let factor = work[r][c];
                for (value, pivot_value) in work[r].iter_mut().zip(pivot_work_row) {
                    *value -= factor * pivot_value;
                }
                for (value, pivot_value) in inverse[r].iter_mut().zip(pivot_inverse_row) {
                    *value -= factor * pivot_value;
                }
            }
        }

        Some((Self { m: inverse }, determinant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq, relative_eq};
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;
    const INVERSE_EPSILON: f32 = 1e-4;

    fn invertible_matrix3() -> Matrix3 {
        Matrix3::new(2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0)
    }

    fn invertible_matrix4() -> Matrix4 {
        Matrix4::new(
            4.0, 7.0, 2.0, 3.0, //
            0.0, 5.0, 0.0, 1.0, //
            1.0, 0.0, 3.0, 0.0, //
            2.0, 1.0, 0.0, 6.0,
        )
    }

    /// Needs row swaps during elimination since the leading entry is zero.
    fn matrix4_requiring_pivoting() -> Matrix4 {
        Matrix4::new(
            0.0, 2.0, 1.0, 0.0, //
            3.0, 0.0, 0.0, 1.0, //
            0.0, 0.0, 4.0, 2.0, //
            1.0, 1.0, 0.0, 5.0,
        )
    }

    prop_compose! {
        fn diagonally_dominant_matrix4_strategy()(
            diagonal in prop::array::uniform4(4.0_f32..8.0),
            signs in prop::array::uniform4(prop::bool::ANY),
            off_diagonal in prop::array::uniform12(-1.0_f32..1.0),
            permutation in Just(vec![0_usize, 1, 2, 3]).prop_shuffle(),
        ) -> Matrix4 {
            let mut off_diagonal = off_diagonal.into_iter();
            let mut rows = [[0.0; 4]; 4];
            for (i, row) in rows.iter_mut().enumerate() {
                for (j, value) in row.iter_mut().enumerate() {
                    *value = if i == j {
                        if signs[i] { diagonal[i] } else { -diagonal[i] }
                    } else {
                        off_diagonal.next().unwrap()
                    };
                }
            }
            Matrix4::from_rows_array(array::from_fn(|i| rows[permutation[i]]))
        }
    }

    #[test]
    fn computing_matrix2_determinant_works() {
        assert_eq!(Matrix2::new(1.0, 2.0, 3.0, 4.0).determinant(), -2.0);
        assert_eq!(Matrix2::identity().determinant(), 1.0);
    }

    #[test]
    fn computing_matrix3_determinant_works() {
        assert_eq!(invertible_matrix3().determinant(), 4.0);
        assert_eq!(
            Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0).determinant(),
            -3.0
        );
    }

    #[test]
    fn computing_matrix4_determinant_matches_glam() {
        let m = invertible_matrix4();
        assert_relative_eq!(
            m.determinant(),
            glam::Mat4::from(m).determinant(),
            max_relative = 1e-5
        );
    }

    #[test]
    fn taking_minor_removes_row_and_column() {
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.minor(0, 0), Matrix2::new(5.0, 6.0, 8.0, 9.0));
        assert_eq!(m.minor(1, 2), Matrix2::new(1.0, 2.0, 7.0, 8.0));
        assert_eq!(
            invertible_matrix4().minor(3, 1),
            Matrix3::new(4.0, 2.0, 3.0, 0.0, 0.0, 1.0, 1.0, 3.0, 0.0)
        );
    }

    #[test]
    #[should_panic]
    fn taking_minor_out_of_range_panics() {
        let _ = Matrix3::identity().minor(3, 0);
    }

    #[test]
    fn cofactors_alternate_in_sign() {
        let m = Matrix3::identity();
        assert_eq!(m.cofactor(0, 0), 1.0);
        assert_eq!(m.cofactor(0, 1), 0.0);
        let m = Matrix3::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(m.cofactor(0, 1), -1.0);
    }

    #[test]
    fn multiplying_by_adjugate_gives_scaled_identity() {
        let m = Matrix2::new(1.0, 2.0, 3.0, 4.0);
        assert_abs_diff_eq!(
            m * m.adjugate(),
            Matrix2::identity() * m.determinant(),
            epsilon = EPSILON
        );

        let m = invertible_matrix3();
        assert_abs_diff_eq!(
            m * m.adjugate(),
            Matrix3::identity() * m.determinant(),
            epsilon = EPSILON
        );

        let m = invertible_matrix4();
        assert_abs_diff_eq!(
            m * m.adjugate(),
            Matrix4::identity() * m.determinant(),
            epsilon = 1e-3
        );
    }

    #[test]
    fn inverting_matrix2_works() {
        let inverse = Matrix2::new(4.0, 7.0, 2.0, 6.0).inverted();
        assert_abs_diff_eq!(
            inverse,
            Matrix2::new(0.6, -0.7, -0.2, 0.4),
            epsilon = EPSILON
        );
    }

    #[test]
    fn inverting_matrix3_works() {
        let m = invertible_matrix3();
        assert_abs_diff_eq!(m * m.inverted(), Matrix3::identity(), epsilon = EPSILON);
        assert_abs_diff_eq!(m.inverted() * m, Matrix3::identity(), epsilon = EPSILON);
    }

    #[test]
    fn inverting_matrix4_works() {
        let m = invertible_matrix4();
        assert_abs_diff_eq!(
            m * m.inverted(),
            Matrix4::identity(),
            epsilon = INVERSE_EPSILON
        );
        assert_abs_diff_eq!(
            m.inverted() * m,
            Matrix4::identity(),
            epsilon = INVERSE_EPSILON
        );
    }

    #[test]
    fn inverting_matrix4_in_place_matches_inverted() {
        let m = matrix4_requiring_pivoting();
        let mut inverted = m;
        inverted.invert();
        assert_eq!(inverted, m.inverted());
    }

    #[test]
    fn inverting_matrix4_requiring_pivoting_works() {
        let m = matrix4_requiring_pivoting();
        assert_abs_diff_eq!(
            m * m.inverted(),
            Matrix4::identity(),
            epsilon = INVERSE_EPSILON
        );
    }

    #[test]
    fn elimination_inverse_matches_adjugate_inverse() {
        for m in [invertible_matrix4(), matrix4_requiring_pivoting()] {
            assert_abs_diff_eq!(
                m.inverted(),
                m.adjugate() / m.determinant(),
                epsilon = INVERSE_EPSILON
            );
        }
    }

    #[test]
    fn elimination_inverse_matches_glam_inverse() {
        let m = matrix4_requiring_pivoting();
        let expected = Matrix4::from(glam::Mat4::from(m).inverse());
        assert_abs_diff_eq!(m.inverted(), expected, epsilon = INVERSE_EPSILON);
    }

    #[test]
    fn pivot_product_equals_cofactor_determinant() {
        for m in [invertible_matrix4(), matrix4_requiring_pivoting()] {
            let (_, pivot_determinant) = m.gauss_jordan_inverse().unwrap();
            assert_relative_eq!(pivot_determinant, m.determinant(), max_relative = 1e-5);
        }
    }

    #[test]
    fn inverting_singular_matrix_gives_identity() {
        let m = Matrix2::new(1.0, 2.0, 1.0, 2.0);
        assert_eq!(m.inverted(), Matrix2::identity());

        let m = Matrix3::new(1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 0.0, 1.0, 0.0);
        assert_eq!(m.inverted(), Matrix3::identity());

        let m = Matrix4::new(
            1.0, 2.0, 3.0, 4.0, //
            1.0, 2.0, 3.0, 4.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0,
        );
        assert_eq!(m.inverted(), Matrix4::identity());
        assert_eq!(Matrix4::zeros().inverted(), Matrix4::identity());
    }

    #[test]
    fn inverting_singular_matrix_in_place_gives_identity() {
        let mut m = Matrix3::zeros();
        m.invert();
        assert_eq!(m, Matrix3::identity());
    }

    #[test]
    fn try_inverting_singular_matrix_fails() {
        assert_eq!(
            Matrix2::new(1.0, 2.0, 2.0, 4.0).try_inverted(),
            Err(MathError::SingularMatrix { determinant: 0.0 })
        );
        assert!(Matrix3::zeros().try_inverted().is_err());
        assert!(matches!(
            Matrix4::zeros().try_inverted(),
            Err(MathError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn try_inverting_invertible_matrix_matches_inverted() {
        let m = invertible_matrix4();
        assert_eq!(m.try_inverted().unwrap(), m.inverted());
        let m = invertible_matrix3();
        assert_eq!(m.try_inverted().unwrap(), m.inverted());
    }

    proptest! {
        #[test]
        fn should_get_same_determinant_from_pivots_and_cofactors(
            m in diagonally_dominant_matrix4_strategy(),
        ) {
            let (_, pivot_determinant) = m.gauss_jordan_inverse().unwrap();
            prop_assert!(relative_eq!(
                pivot_determinant,
                m.determinant(),
                epsilon = 1e-4,
                max_relative = 1e-4
            ));
        }
    }

    proptest! {
        #[test]
        fn should_get_identity_when_multiplying_by_inverse(
            m in diagonally_dominant_matrix4_strategy(),
        ) {
            let inverse = m.inverted();
            prop_assert!(approx::abs_diff_eq!(m * inverse, Matrix4::identity(), epsilon = INVERSE_EPSILON));
            prop_assert!(approx::abs_diff_eq!(inverse * m, Matrix4::identity(), epsilon = INVERSE_EPSILON));
        }
    }
}
