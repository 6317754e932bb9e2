//! Minimal 2D geometry primitives for gravity-aligned scanning.
//!
//! Points and displacements share the `Vec2` type. `Mat2` covers the only
//! linear maps the scanner needs (rotations), and `Transform` composes a
//! rotation with a pre-applied translation so a table can map image
//! coordinates into an origin-centered, gravity-aligned frame and back.

use core::ops::{Add, Mul, Neg, Sub};

mod box2;
mod segment;

pub use box2::AlignedBox2;
pub use segment::LineSegment;

/// 2D vector with `f32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Linear interpolation from `a` to `b` by fraction `t`.
    pub fn lerp(t: f32, a: Self, b: Self) -> Self {
        a + (b - a) * t
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// 2D grid coordinate with `i32` components.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    /// Creates a grid coordinate from components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 2x2 matrix in row-major order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2 {
    pub m00: f32,
    pub m01: f32,
    pub m10: f32,
    pub m11: f32,
}

impl Mat2 {
    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            m00: cos,
            m01: -sin,
            m10: sin,
            m11: cos,
        }
    }

    /// Matrix transpose; inverts a rotation.
    pub fn transpose(self) -> Self {
        Self {
            m00: self.m00,
            m01: self.m10,
            m10: self.m01,
            m11: self.m11,
        }
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(
            self.m00 * rhs.x + self.m01 * rhs.y,
            self.m10 * rhs.x + self.m11 * rhs.y,
        )
    }
}

/// Rotation composed with a translation applied before it.
///
/// `apply(p) = R * (p + t)`, matching the "translate to center, then rotate
/// into the gravity frame" construction of the feature table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    rotation: Mat2,
    translation: Vec2,
}

impl Transform {
    /// Creates a transform from a rotation and a pre-applied translation.
    pub fn new(rotation: Mat2, translation: Vec2) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Maps a point into the transformed frame.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.rotation * (point + self.translation)
    }

    /// Exact inverse of [`Transform::apply`] for rotation matrices.
    pub fn apply_inverse(&self, point: Vec2) -> Vec2 {
        self.rotation.transpose() * point - self.translation
    }
}
