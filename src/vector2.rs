use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[allow(unused_imports)]
use micromath::F32Ext;
use serde::{Deserialize, Serialize};

use crate::ZeroLengthError;

/// A 2-component Euclidean vector.
///
/// Operators with a `Vector2` right-hand side apply component-wise; operators
/// with an `f32` right-hand side broadcast the scalar to both components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Unit vector at `theta` radians counter-clockwise from the x axis.
    pub fn from_angle(theta: f32) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    pub fn from_polar(theta: f32, length: f32) -> Self {
        Self::new(theta.cos() * length, theta.sin() * length)
    }

    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    pub fn scale_mut(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
    }

    /// Euclidean norm. Components are scaled by the largest absolute value
    /// before squaring so that intermediate squares cannot overflow or
    /// underflow.
    pub fn length(self) -> f32 {
        let max = self.x.abs().max(self.y.abs());
        if max == 0.0 || !max.is_finite() {
            return self.length_squared().sqrt();
        }
        let (x, y) = (self.x / max, self.y / max);
        max * (x * x + y * y).sqrt()
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction, or `Err` when the length is
    /// exactly zero.
    pub fn normalize(self) -> Result<Self, ZeroLengthError> {
        let len = self.length();
        if len == 0.0 {
            return Err(ZeroLengthError);
        }
        Ok(Self::new(self.x / len, self.y / len))
    }

    pub fn normalize_mut(&mut self) -> Result<(), ZeroLengthError> {
        *self = self.normalize()?;
        Ok(())
    }

    /// Rotates counter-clockwise by `theta` radians about the origin.
    pub fn rotate(self, theta: f32) -> Self {
        let (sin, cos) = (theta.sin(), theta.cos());
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn rotate_mut(&mut self, theta: f32) {
        *self = self.rotate(theta);
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

    /// `(-y, x)`, a quarter turn counter-clockwise.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Signed angle in `(-pi, pi]` from `self` to `other`, positive when
    /// `other` is counter-clockwise from `self`.
    pub fn angle_between(self, other: Self) -> f32 {
        let cross = self.x * other.y - self.y * other.x;
        cross.atan2(self.dot(other))
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from(a: [f32; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul for Vector2 {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl Div for Vector2 {
    type Output = Self;
    fn div(self, other: Self) -> Self::Output {
        Self::new(self.x / other.x, self.y / other.y)
    }
}

impl Add<f32> for Vector2 {
    type Output = Self;
    fn add(self, s: f32) -> Self::Output {
        Self::new(self.x + s, self.y + s)
    }
}

impl Sub<f32> for Vector2 {
    type Output = Self;
    fn sub(self, s: f32) -> Self::Output {
        Self::new(self.x - s, self.y - s)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, s: f32) -> Self::Output {
        Self::new(self.x * s, self.y * s)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;
    fn div(self, s: f32) -> Self::Output {
        Self::new(self.x / s, self.y / s)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl MulAssign for Vector2 {
    fn mul_assign(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
    }
}

impl DivAssign for Vector2 {
    fn div_assign(&mut self, other: Self) {
        self.x /= other.x;
        self.y /= other.y;
    }
}

impl AddAssign<f32> for Vector2 {
    fn add_assign(&mut self, s: f32) {
        self.x += s;
        self.y += s;
    }
}

impl SubAssign<f32> for Vector2 {
    fn sub_assign(&mut self, s: f32) {
        self.x -= s;
        self.y -= s;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
    }
}

impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, s: f32) {
        self.x /= s;
        self.y /= s;
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}
