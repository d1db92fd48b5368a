//! Vectors.
//!
//! [`Vector4`] is a homogeneous vector: its length, dot product, cross
//! product and normalization only involve the spatial `x`, `y` and `z`
//! components, and the binary arithmetic operators reset `w` to 1. The
//! compound assignment operators leave `w` untouched. Use
//! [`Vector4::normalized_w`] or [`Vector4::normalized_by`] when `w` should
//! take part.

use crate::error::MathError;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut, Mul},
};

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    x: f32,
    y: f32,
}

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

/// A 4-dimensional homogeneous vector.
///
/// The default value is the origin point `(0, 0, 0, 1)`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

/// Dot product between vectors, possibly of different dimensions.
///
/// Only the leading components shared by both operands participate, and the
/// `w` component of a [`Vector4`] never does.
pub trait Dot<Rhs = Self> {
    /// Computes the dot product of this vector with another.
    fn dot(&self, rhs: &Rhs) -> f32;
}

/// Cross product between 3D vectors. A [`Vector4`] takes part through its
/// spatial components.
pub trait Cross<Rhs = Self> {
    type Output;

    /// Computes the cross product of this vector with another.
    fn cross(&self, rhs: &Rhs) -> Self::Output;
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// The components as an array.
    #[inline]
    pub const fn components(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Normalizes the vector in place. A zero vector becomes non-finite.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Divides the vector by the given length in place.
    #[inline]
    pub fn normalize_by(&mut self, length: f32) -> &mut Self {
        *self = self.normalized_by(length);
        self
    }

    /// Computes the normalized version of the vector. The result is
    /// non-finite for a zero vector.
    #[inline]
    pub fn normalized(&self) -> Self {
        self.normalized_by(self.length())
    }

    /// Divides each component by the given length.
    #[inline]
    pub fn normalized_by(&self, length: f32) -> Self {
        Self::new(self.x / length, self.y / length)
    }

    /// Computes the normalized version of the vector.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateVector`] if the length is below
    /// machine epsilon.
    pub fn try_normalized(&self) -> Result<Self, MathError> {
        let length = self.length();
        if length < f32::EPSILON {
            return Err(MathError::DegenerateVector { length });
        }
        Ok(self.normalized_by(length))
    }

    /// Whether all components are smaller in magnitude than machine epsilon.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.abs() < f32::EPSILON && self.y.abs() < f32::EPSILON
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y))
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.z
    }

    /// The components as an array.
    #[inline]
    pub const fn components(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Normalizes the vector in place. A zero vector becomes non-finite.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Divides the vector by the given length in place.
    #[inline]
    pub fn normalize_by(&mut self, length: f32) -> &mut Self {
        *self = self.normalized_by(length);
        self
    }

    /// Computes the normalized version of the vector. The result is
    /// non-finite for a zero vector.
    #[inline]
    pub fn normalized(&self) -> Self {
        self.normalized_by(self.length())
    }

    /// Divides each component by the given length.
    #[inline]
    pub fn normalized_by(&self, length: f32) -> Self {
        Self::new(self.x / length, self.y / length, self.z / length)
    }

    /// Computes the normalized version of the vector.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateVector`] if the length is below
    /// machine epsilon.
    pub fn try_normalized(&self) -> Result<Self, MathError> {
        let length = self.length();
        if length < f32::EPSILON {
            return Err(MathError::DegenerateVector { length });
        }
        Ok(self.normalized_by(length))
    }

    /// Whether all components are smaller in magnitude than machine epsilon.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.abs() < f32::EPSILON && self.y.abs() < f32::EPSILON && self.z.abs() < f32::EPSILON
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point with the given spatial components and `w = 1`.
    #[inline]
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a direction with the given spatial components and `w = 0`.
    #[inline]
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Creates a new vector with all zeros, including `w`.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.w
    }

    /// The components as an array.
    #[inline]
    pub const fn components(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The 3D vector containing the x-, y- and z-components of this vector.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Computes the length of the spatial part of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Computes the square of the length of the spatial part of the vector.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Normalizes the spatial part in place and sets `w` to 1.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Divides all four components by the given length in place.
    #[inline]
    pub fn normalize_by(&mut self, length: f32) -> &mut Self {
        *self = self.normalized_by(length);
        self
    }

    /// Divides the spatial part by `w` in place and sets `w` to 1.
    #[inline]
    pub fn normalize_w(&mut self) -> &mut Self {
        *self = self.normalized_w();
        self
    }

    /// Computes the vector with the spatial part normalized and `w = 1`.
    /// The result is non-finite when the spatial part is zero.
    #[inline]
    pub fn normalized(&self) -> Self {
        let length = self.length();
        Self::new(self.x / length, self.y / length, self.z / length, 1.0)
    }

    /// Divides all four components, including `w`, by the given length.
    #[inline]
    pub fn normalized_by(&self, length: f32) -> Self {
        Self::new(
            self.x / length,
            self.y / length,
            self.z / length,
            self.w / length,
        )
    }

    /// Performs the perspective division, dividing the spatial part by `w`
    /// and setting `w` to 1.
    #[inline]
    pub fn normalized_w(&self) -> Self {
        Self::new(self.x / self.w, self.y / self.w, self.z / self.w, 1.0)
    }

    /// Computes the vector with the spatial part normalized and `w = 1`.
    ///
    /// # Errors
    /// Returns [`MathError::DegenerateVector`] if the spatial length is below
    /// machine epsilon.
    pub fn try_normalized(&self) -> Result<Self, MathError> {
        let length = self.length();
        if length < f32::EPSILON {
            return Err(MathError::DegenerateVector { length });
        }
        Ok(self.normalized())
    }

    /// Whether all spatial components are smaller in magnitude than machine
    /// epsilon. The w-component is ignored.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.abs() < f32::EPSILON && self.y.abs() < f32::EPSILON && self.z.abs() < f32::EPSILON
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }
}

impl Default for Vector4 {
    #[inline]
    fn default() -> Self {
        Self::point(0.0, 0.0, 0.0)
    }
}

macro_rules! impl_dot {
    ($tl:ty, $tr:ty, $first:ident $(, $rest:ident)*) => {
        impl Dot<$tr> for $tl {
            #[inline]
            fn dot(&self, rhs: &$tr) -> f32 {
                self.$first * rhs.$first $(+ self.$rest * rhs.$rest)*
            }
        }
    };
}

impl_dot!(Vector2, Vector2, x, y);
impl_dot!(Vector2, Vector3, x, y);
impl_dot!(Vector2, Vector4, x, y);
impl_dot!(Vector3, Vector2, x, y);
impl_dot!(Vector3, Vector3, x, y, z);
impl_dot!(Vector3, Vector4, x, y, z);
impl_dot!(Vector4, Vector2, x, y);
impl_dot!(Vector4, Vector3, x, y, z);
impl_dot!(Vector4, Vector4, x, y, z);

macro_rules! impl_cross {
    ($tl:ty, $tr:ty, |$x:ident, $y:ident, $z:ident| $construct:expr) => {
        impl Cross<$tr> for $tl {
            type Output = $tl;

            #[inline]
            fn cross(&self, rhs: &$tr) -> Self::Output {
                let $x = self.y * rhs.z - self.z * rhs.y;
                let $y = self.z * rhs.x - self.x * rhs.z;
                let $z = self.x * rhs.y - self.y * rhs.x;
                $construct
            }
        }
    };
}

impl_cross!(Vector3, Vector3, |x, y, z| Vector3::new(x, y, z));
impl_cross!(Vector3, Vector4, |x, y, z| Vector3::new(x, y, z));
impl_cross!(Vector4, Vector3, |x, y, z| Vector4::point(x, y, z));
impl_cross!(Vector4, Vector4, |x, y, z| Vector4::point(x, y, z));

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        vector.components()
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.components()
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.components()
    }
}

impl From<Vector3> for Vector2 {
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.xy()
    }
}

impl From<Vector4> for Vector2 {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.xy()
    }
}

impl From<Vector2> for Vector3 {
    /// Appends `z = 0`.
    #[inline]
    fn from(vector: Vector2) -> Self {
        vector.extended(0.0)
    }
}

impl From<Vector4> for Vector3 {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.xyz()
    }
}

impl From<Vector2> for Vector4 {
    /// Appends `z = 0` and `w = 1`.
    #[inline]
    fn from(vector: Vector2) -> Self {
        Self::point(vector.x, vector.y, 0.0)
    }
}

impl From<Vector3> for Vector4 {
    /// Appends `w = 1`.
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.extended(1.0)
    }
}

impl From<glam::Vec2> for Vector2 {
    #[inline]
    fn from(vector: glam::Vec2) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl From<Vector2> for glam::Vec2 {
    #[inline]
    fn from(vector: Vector2) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl From<glam::Vec3> for Vector3 {
    #[inline]
    fn from(vector: glam::Vec3) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    #[inline]
    fn from(vector: Vector3) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl From<glam::Vec4> for Vector4 {
    #[inline]
    fn from(vector: glam::Vec4) -> Self {
        Self::new(vector.x, vector.y, vector.z, vector.w)
    }
}

impl From<Vector4> for glam::Vec4 {
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::new(vector.x, vector.y, vector.z, vector.w)
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x + b.x, a.y + b.y)
});

impl_binop!(Add, add, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x + b, a.y + b)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::new(a.x - b.x, a.y - b.y)
});

impl_binop!(Sub, sub, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x - b, a.y - b)
});

impl_binop!(Mul, mul, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x * b, a.y * b)
});

impl_binop!(Mul, mul, f32, Vector2, Vector2, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector2, f32, Vector2, |a, b| {
    Vector2::new(a.x / b, a.y / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.x += b.x;
    a.y += b.y;
});

impl_binop_assign!(AddAssign, add_assign, Vector2, f32, |a, b| {
    a.x += b;
    a.y += b;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, f32, |a, b| {
    a.x -= b;
    a.y -= b;
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, f32, |a, b| {
    a.x *= b;
    a.y *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector2, f32, |a, b| {
    a.x /= b;
    a.y /= b;
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::new(-val.x, -val.y)
});

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Add, add, Vector3, Vector4, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Add, add, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x + b, a.y + b, a.z + b)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Sub, sub, Vector3, Vector4, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Sub, sub, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x - b, a.y - b, a.z - b)
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector3, f32, Vector3, |a, b| {
    Vector3::new(a.x / b, a.y / b, a.z / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector4, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(AddAssign, add_assign, Vector3, f32, |a, b| {
    a.x += b;
    a.y += b;
    a.z += b;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector4, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, f32, |a, b| {
    a.x -= b;
    a.y -= b;
    a.z -= b;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector3, f32, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

// The binary operators below produce points, so `w` is reset to 1.

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::point(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Add, add, Vector4, Vector3, Vector4, |a, b| {
    Vector4::point(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Add, add, Vector4, f32, Vector4, |a, b| {
    Vector4::point(a.x + b, a.y + b, a.z + b)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::point(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Sub, sub, Vector4, Vector3, Vector4, |a, b| {
    Vector4::point(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Sub, sub, Vector4, f32, Vector4, |a, b| {
    Vector4::point(a.x - b, a.y - b, a.z - b)
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, b| {
    Vector4::point(a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, f32, Vector4, Vector4, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector4, f32, Vector4, |a, b| {
    Vector4::point(a.x / b, a.y / b, a.z / b)
});

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector4, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(AddAssign, add_assign, Vector4, Vector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(AddAssign, add_assign, Vector4, f32, |a, b| {
    a.x += b;
    a.y += b;
    a.z += b;
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector4, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector4, f32, |a, b| {
    a.x -= b;
    a.y -= b;
    a.z -= b;
});

impl_binop_assign!(MulAssign, mul_assign, Vector4, f32, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_binop_assign!(DivAssign, div_assign, Vector4, f32, |a, b| {
    a.x /= b;
    a.y /= b;
    a.z /= b;
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::point(-val.x, -val.y, -val.z)
});

macro_rules! impl_index {
    ($t:ty, $n:literal) => {
        impl Index<usize> for $t {
            type Output = f32;

            /// # Panics
            /// If the index is outside the vector.
            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &bytemuck::cast_ref::<$t, [f32; $n]>(self)[index]
            }
        }

        impl IndexMut<usize> for $t {
            /// # Panics
            /// If the index is outside the vector.
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut bytemuck::cast_mut::<$t, [f32; $n]>(self)[index]
            }
        }
    };
}

impl_index!(Vector2, 2);
impl_index!(Vector3, 3);
impl_index!(Vector4, 4);

impl_approx_eq_componentwise!(Vector2, components);
impl_approx_eq_componentwise!(Vector3, components);
impl_approx_eq_componentwise!(Vector4, components);

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn computing_vector3_length_works() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
    }

    #[test]
    fn normalizing_vector3_works() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_abs_diff_eq!(v.normalized(), Vector3::new(0.6, 0.8, 0.0), epsilon = EPSILON);

        let mut v = v;
        v.normalize();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector_gives_non_finite_components() {
        let normalized = Vector3::zeros().normalized();
        assert!(normalized.x().is_nan());
        assert!(normalized.y().is_nan());
        assert!(normalized.z().is_nan());

        let normalized = Vector2::zeros().normalized();
        assert!(!normalized.x().is_finite());
    }

    #[test]
    fn try_normalizing_zero_vector_fails() {
        assert!(matches!(
            Vector3::zeros().try_normalized(),
            Err(MathError::DegenerateVector { .. })
        ));
        assert!(Vector2::zeros().try_normalized().is_err());
        assert!(Vector4::point(0.0, 0.0, 0.0).try_normalized().is_err());
    }

    #[test]
    fn try_normalizing_nonzero_vector_matches_normalized() {
        let v = Vector2::new(-2.0, 7.0);
        assert_eq!(v.try_normalized().unwrap(), v.normalized());
    }

    #[test]
    fn normalizing_by_given_length_divides_components() {
        let mut v = Vector2::new(2.0, 4.0);
        v.normalize_by(2.0);
        assert_eq!(v, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn vector4_length_ignores_w() {
        let v = Vector4::new(3.0, 4.0, 0.0, 100.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
    }

    #[test]
    fn normalizing_vector4_resets_w() {
        let v = Vector4::new(0.0, 0.0, 2.0, 7.0).normalized();
        assert_eq!(v, Vector4::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn normalizing_vector4_by_length_divides_w() {
        let v = Vector4::new(2.0, 4.0, 6.0, 8.0).normalized_by(2.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn normalizing_vector4_by_w_performs_perspective_division() {
        let mut v = Vector4::new(2.0, 4.0, 6.0, 2.0);
        v.normalize_w();
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn dot_product_of_same_dimension_vectors_works() {
        assert_eq!(Vector2::new(1.0, 2.0).dot(&Vector2::new(3.0, 4.0)), 11.0);
        assert_eq!(
            Vector3::new(1.0, 2.0, 3.0).dot(&Vector3::new(4.0, 5.0, 6.0)),
            32.0
        );
    }

    #[test]
    fn vector4_dot_product_ignores_w() {
        let a = Vector4::new(1.0, 2.0, 3.0, 10.0);
        let b = Vector4::new(4.0, 5.0, 6.0, 10.0);
        assert_eq!(a.dot(&b), 32.0);
    }

    #[test]
    fn mixed_dimension_dot_product_uses_shared_components() {
        let v2 = Vector2::new(1.0, 2.0);
        let v3 = Vector3::new(3.0, 4.0, 5.0);
        let v4 = Vector4::new(6.0, 7.0, 8.0, 9.0);

        assert_eq!(v3.dot(&v2), 11.0);
        assert_eq!(v2.dot(&v3), 11.0);
        assert_eq!(v4.dot(&v2), 20.0);
        assert_eq!(v3.dot(&v4), 18.0 + 28.0 + 40.0);
        assert_eq!(v4.dot(&v3), v3.dot(&v4));
    }

    #[test]
    fn cross_product_follows_right_hand_rule() {
        let x = Vector3::unit_x();
        let y = Vector3::unit_y();
        assert_eq!(x.cross(&y), Vector3::unit_z());
        assert_eq!(y.cross(&x), -Vector3::unit_z());
    }

    #[test]
    fn cross_product_is_orthogonal_to_operands() {
        let a = Vector3::new(1.0, -2.0, 0.5);
        let b = Vector3::new(3.0, 1.0, -4.0);
        let c = a.cross(&b);
        assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn vector4_cross_product_has_unit_w() {
        let a = Vector4::new(1.0, 0.0, 0.0, 5.0);
        let b = Vector4::new(0.0, 1.0, 0.0, 3.0);
        assert_eq!(a.cross(&b), Vector4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(a.cross(&Vector3::unit_y()), Vector4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(Vector3::unit_x().cross(&b), Vector3::unit_z());
    }

    #[test]
    fn checking_for_zero_vector_works() {
        assert!(Vector2::zeros().is_zero());
        assert!(Vector3::new(1e-9, -1e-9, 0.0).is_zero());
        assert!(!Vector3::new(0.0, 0.0, 1e-3).is_zero());
        assert!(Vector4::new(0.0, 0.0, 0.0, 5.0).is_zero());
    }

    #[test]
    fn vector3_arithmetic_is_componentwise() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(&a + &b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a + 1.0, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn vector3_assignment_operations_work() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v += Vector3::same(1.0);
        assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
        v -= 1.0;
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        v *= 3.0;
        assert_eq!(v, Vector3::new(3.0, 6.0, 9.0));
        v /= 3.0;
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        v -= Vector4::new(1.0, 1.0, 1.0, 7.0);
        assert_eq!(v, Vector3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn vector3_plus_vector4_uses_spatial_part() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector4::new(1.0, 1.0, 1.0, 9.0);
        assert_eq!(a + b, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(a - b, Vector3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn vector4_binary_operations_reset_w() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(1.0, 1.0, 1.0, 4.0);

        assert_eq!(a + b, Vector4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(a - b, Vector4::new(0.0, 1.0, 2.0, 1.0));
        assert_eq!(a + Vector3::same(1.0), Vector4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(a + 1.0, Vector4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(a - 1.0, Vector4::new(0.0, 1.0, 2.0, 1.0));
        assert_eq!(a * 2.0, Vector4::new(2.0, 4.0, 6.0, 1.0));
        assert_eq!(2.0 * a, Vector4::new(2.0, 4.0, 6.0, 1.0));
        assert_eq!(a / 2.0, Vector4::new(0.5, 1.0, 1.5, 1.0));
        assert_eq!(-a, Vector4::new(-1.0, -2.0, -3.0, 1.0));
    }

    #[test]
    fn vector4_assignment_operations_keep_w() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        v += Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v, Vector4::new(2.0, 3.0, 4.0, 4.0));
        v -= Vector3::same(1.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));
        v *= 2.0;
        assert_eq!(v, Vector4::new(2.0, 4.0, 6.0, 4.0));
        v /= 2.0;
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 4.0));
        v += 1.0;
        assert_eq!(v, Vector4::new(2.0, 3.0, 4.0, 4.0));
    }

    #[test]
    fn dividing_vector_by_zero_gives_infinity() {
        let v = Vector2::new(1.0, -1.0) / 0.0;
        assert_eq!(v.x(), f32::INFINITY);
        assert_eq!(v.y(), f32::NEG_INFINITY);
    }

    #[test]
    fn indexing_vectors_works() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 4.0);
        v[2] = 7.0;
        assert_eq!(v.z(), 7.0);

        let mut v = Vector2::new(5.0, 6.0);
        v[1] = 8.0;
        assert_eq!(v, Vector2::new(5.0, 8.0));
    }

    #[test]
    #[should_panic]
    fn indexing_vector_out_of_bounds_panics() {
        let v = Vector3::zeros();
        let _ = v[3];
    }

    #[test]
    fn default_vector4_is_origin_point() {
        assert_eq!(Vector4::default(), Vector4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Vector3::default(), Vector3::zeros());
    }

    #[test]
    fn converting_between_vector_dimensions_works() {
        let v2 = Vector2::new(1.0, 2.0);
        assert_eq!(Vector3::from(v2), Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(Vector4::from(v2), Vector4::new(1.0, 2.0, 0.0, 1.0));

        let v3 = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Vector4::from(v3), Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vector2::from(v3), v2);

        let v4 = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vector3::from(v4), v3);
        assert_eq!(Vector2::from(v4), v2);
    }

    #[test]
    fn converting_to_and_from_glam_preserves_components() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let g: glam::Vec4 = v.into();
        assert_eq!(g, glam::Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Vector4::from(g), v);

        let v = Vector3::new(-1.0, 0.5, 2.0);
        assert_eq!(Vector3::from(glam::Vec3::from(v)), v);
    }

    #[test]
    fn formatting_vectors_works() {
        assert_eq!(Vector2::new(1.0, 2.5).to_string(), "(1, 2.5)");
        assert_eq!(Vector3::new(1.0, -2.0, 3.0).to_string(), "(1, -2, 3)");
        assert_eq!(
            Vector4::new(1.0, 2.0, 3.0, 1.0).to_string(),
            "(1, 2, 3, 1)"
        );
    }

    #[test]
    fn mapping_and_component_mul_work() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.mapped(|c| c * c), Vector3::new(1.0, 4.0, 9.0));
        assert_eq!(
            v.component_mul(&Vector3::new(2.0, 0.5, -1.0)),
            Vector3::new(2.0, 1.0, -3.0)
        );
    }
}
