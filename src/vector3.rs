use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[allow(unused_imports)]
use micromath::F32Ext;
use serde::{Deserialize, Serialize};

use crate::ZeroLengthError;

/// A 3-component Euclidean vector.
///
/// Operators with a `Vector3` right-hand side apply component-wise; operators
/// with an `f32` right-hand side broadcast the scalar to all components.
/// Rotation, perpendicular, and signed angle are 2D-only notions and live on
/// [`Vector2`](crate::Vector2); the 3D-specific operation here is
/// [`cross`](Vector3::cross).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product; the result is orthogonal to both operands.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn cross_mut(&mut self, other: Self) {
        *self = self.cross(other);
    }

    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn scale_mut(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }

    /// Euclidean norm. Components are scaled by the largest absolute value
    /// before squaring so that intermediate squares cannot overflow or
    /// underflow.
    pub fn length(self) -> f32 {
        let max = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if max == 0.0 || !max.is_finite() {
            return self.length_squared().sqrt();
        }
        let (x, y, z) = (self.x / max, self.y / max, self.z / max);
        max * (x * x + y * y + z * z).sqrt()
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Unit vector in the same direction, or `Err` when the length is
    /// exactly zero.
    pub fn normalize(self) -> Result<Self, ZeroLengthError> {
        let len = self.length();
        if len == 0.0 {
            return Err(ZeroLengthError);
        }
        Ok(Self::new(self.x / len, self.y / len, self.z / len))
    }

    pub fn normalize_mut(&mut self) -> Result<(), ZeroLengthError> {
        *self = self.normalize()?;
        Ok(())
    }

    /// Linear interpolation `(1 - t) * self + t * other`. `t` is not
    /// clamped; values outside `[0, 1]` extrapolate.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.scale(1.0 - t) + other.scale(t)
    }

    pub fn lerp_mut(&mut self, other: Self, t: f32) {
        *self = self.lerp(other, t);
    }

    pub fn distance_to(self, other: Self) -> f32 {
        (other - self).length()
    }

    pub fn distance_squared_to(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Vector projection of `self` onto `other`, or `Err` when `other` has
    /// exactly zero length.
    pub fn project_onto(self, other: Self) -> Result<Self, ZeroLengthError> {
        let denom = other.length_squared();
        if denom == 0.0 {
            return Err(ZeroLengthError);
        }
        Ok(other.scale(self.dot(other) / denom))
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul for Vector3 {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl Div for Vector3 {
    type Output = Self;
    fn div(self, other: Self) -> Self::Output {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }
}

impl Add<f32> for Vector3 {
    type Output = Self;
    fn add(self, s: f32) -> Self::Output {
        Self::new(self.x + s, self.y + s, self.z + s)
    }
}

impl Sub<f32> for Vector3 {
    type Output = Self;
    fn sub(self, s: f32) -> Self::Output {
        Self::new(self.x - s, self.y - s, self.z - s)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, s: f32) -> Self::Output {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;
    fn div(self, s: f32) -> Self::Output {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl MulAssign for Vector3 {
    fn mul_assign(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
    }
}

impl DivAssign for Vector3 {
    fn div_assign(&mut self, other: Self) {
        self.x /= other.x;
        self.y /= other.y;
        self.z /= other.z;
    }
}

impl AddAssign<f32> for Vector3 {
    fn add_assign(&mut self, s: f32) {
        self.x += s;
        self.y += s;
        self.z += s;
    }
}

impl SubAssign<f32> for Vector3 {
    fn sub_assign(&mut self, s: f32) {
        self.x -= s;
        self.y -= s;
        self.z -= s;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, s: f32) {
        self.x /= s;
        self.y /= s;
        self.z /= s;
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}
