//! Transform builders and affine decomposition.
//!
//! The decomposition helpers read scale and rotation from the rows of the
//! linear part, so they recover `S` and `R` exactly for a matrix composed
//! as `S * R` (or with uniform scaling). Shear is neither detected nor
//! reported.

use crate::{
    matrix::{Matrix2, Matrix3, Matrix4},
    vector::{Cross, Dot, Vector2, Vector3, Vector4},
};

/// Returns `Some((cos, sin))` for angles that are not negligibly small.
#[inline]
fn cos_sin(angle: f32) -> Option<(f32, f32)> {
    (angle.abs() > f32::EPSILON).then(|| (angle.cos(), angle.sin()))
}

impl Matrix2 {
    /// Creates a matrix rotating counterclockwise by the given angle in
    /// radians.
    pub fn rotation(angle: f32) -> Self {
        match cos_sin(angle) {
            Some((cos, sin)) => Self::new(cos, -sin, sin, cos),
            None => Self::identity(),
        }
    }

    /// Creates a matrix scaling by the given factor along each axis.
    #[inline]
    pub fn scaling(sx: f32, sy: f32) -> Self {
        Self::from_diagonal(&Vector2::new(sx, sy))
    }

    /// Returns the lengths of the rows.
    #[inline]
    pub fn scale_component(&self) -> Vector2 {
        Vector2::new(self.row(0).length(), self.row(1).length())
    }

    /// Returns the matrix with each row normalized.
    #[inline]
    pub fn rotation_component(&self) -> Self {
        Self::from_rows(&self.row(0).normalized(), &self.row(1).normalized())
    }

    /// Normalizes each row in place.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns the matrix with each row normalized.
    #[inline]
    pub fn normalized(&self) -> Self {
        self.rotation_component()
    }
}

impl Matrix3 {
    /// Creates a matrix rotating by the given angle in radians about the
    /// x-axis, following the right-hand rule.
    pub fn rotation_x(angle: f32) -> Self {
        match cos_sin(angle) {
            Some((cos, sin)) => Self::new(1.0, 0.0, 0.0, 0.0, cos, -sin, 0.0, sin, cos),
            None => Self::identity(),
        }
    }

    /// Creates a matrix rotating by the given angle in radians about the
    /// y-axis, following the right-hand rule.
    pub fn rotation_y(angle: f32) -> Self {
        match cos_sin(angle) {
            Some((cos, sin)) => Self::new(cos, 0.0, sin, 0.0, 1.0, 0.0, -sin, 0.0, cos),
            None => Self::identity(),
        }
    }

    /// Creates a matrix rotating by the given angle in radians about the
    /// z-axis, following the right-hand rule.
    pub fn rotation_z(angle: f32) -> Self {
        match cos_sin(angle) {
            Some((cos, sin)) => Self::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0),
            None => Self::identity(),
        }
    }

    /// Creates a matrix that rotates about the x-axis first, then the y-axis
    /// and finally the z-axis, i.e. `rz * ry * rx`.
    pub fn rotation_xyz(angle_x: f32, angle_y: f32, angle_z: f32) -> Self {
        Self::rotation_z(angle_z) * Self::rotation_y(angle_y) * Self::rotation_x(angle_x)
    }

    /// Creates a matrix scaling by the given factor along each axis.
    #[inline]
    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_diagonal(&Vector3::new(sx, sy, sz))
    }

    /// Returns the lengths of the rows.
    #[inline]
    pub fn scale_component(&self) -> Vector3 {
        Vector3::new(
            self.row(0).length(),
            self.row(1).length(),
            self.row(2).length(),
        )
    }

    /// Returns the matrix with each row normalized.
    pub fn rotation_component(&self) -> Self {
        Self::from_rows(
            &self.row(0).normalized(),
            &self.row(1).normalized(),
            &self.row(2).normalized(),
        )
    }

    /// Normalizes each row in place.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns the matrix with each row normalized.
    #[inline]
    pub fn normalized(&self) -> Self {
        self.rotation_component()
    }
}

impl Matrix4 {
    /// Creates a matrix rotating about the x-axis. See
    /// [`Matrix3::rotation_x`].
    #[inline]
    pub fn rotation_x(angle: f32) -> Self {
        Self::from(Matrix3::rotation_x(angle))
    }

    /// Creates a matrix rotating about the y-axis. See
    /// [`Matrix3::rotation_y`].
    #[inline]
    pub fn rotation_y(angle: f32) -> Self {
        Self::from(Matrix3::rotation_y(angle))
    }

    /// Creates a matrix rotating about the z-axis. See
    /// [`Matrix3::rotation_z`].
    #[inline]
    pub fn rotation_z(angle: f32) -> Self {
        Self::from(Matrix3::rotation_z(angle))
    }

    /// Creates a matrix that rotates about the x-axis first, then the y-axis
    /// and finally the z-axis, i.e. `rz * ry * rx`.
    pub fn rotation_xyz(angle_x: f32, angle_y: f32, angle_z: f32) -> Self {
        Self::rotation_z(angle_z) * Self::rotation_y(angle_y) * Self::rotation_x(angle_x)
    }

    /// Creates a matrix scaling by the given factor along each spatial axis.
    #[inline]
    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self::from_diagonal(&Vector4::new(sx, sy, sz, 1.0))
    }

    /// Creates a matrix translating points by the given offsets.
    pub fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        let mut matrix = Self::identity();
        matrix.set_column(3, &Vector4::point(tx, ty, tz));
        matrix
    }

    /// Creates the world-to-view matrix for a camera at `eye` whose z-axis
    /// points towards `at` and whose up direction is as close to `up` as
    /// possible.
    ///
    /// The rows of the rotation block are the camera axes, and the last
    /// column moves `eye` to the origin. `up` must not be parallel to the
    /// viewing direction, and `eye` must differ from `at`, otherwise the
    /// result contains NaN.
    pub fn look_at(eye: &Vector3, at: &Vector3, up: &Vector3) -> Self {
        let z_axis = (at - eye).normalized();
        let x_axis = up.cross(&z_axis).normalized();
        let y_axis = z_axis.cross(&x_axis);

        Self::from_rows(
            &x_axis.extended(-x_axis.dot(eye)),
            &y_axis.extended(-y_axis.dot(eye)),
            &z_axis.extended(-z_axis.dot(eye)),
            &Vector4::unit_w(),
        )
    }

    /// Returns the lengths of the spatial parts of the first three rows.
    #[inline]
    pub fn scale_component(&self) -> Vector3 {
        Matrix3::from(*self).scale_component()
    }

    /// Returns the upper-left 3x3 block with each row normalized.
    #[inline]
    pub fn rotation_component(&self) -> Matrix3 {
        Matrix3::from(*self).rotation_component()
    }

    /// Returns the first three entries of the last column.
    #[inline]
    pub fn translation_component(&self) -> Vector3 {
        self.column(3).xyz()
    }

    /// Normalizes the rows of the upper-left 3x3 block in place.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns the matrix with the rows of the upper-left 3x3 block
    /// normalized. The last row and column are kept.
    pub fn normalized(&self) -> Self {
        let rotation = self.rotation_component();
        let mut normalized = *self;
        for i in 0..3 {
            normalized.set_row(i, &rotation.row(i).extended(self.element(i, 3)));
        }
        normalized
    }
}
