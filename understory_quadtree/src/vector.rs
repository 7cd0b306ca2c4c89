// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable 2D vector used for positions and sizes.

use core::f64::consts::PI;
use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::util::round_milli;

/// A 2D vector or point.
///
/// Every operation returns a new value; nothing mutates the receiver.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component (grows downward in screen space).
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a vector from its components.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Negate both components.
    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Mirror across the x-axis (negates `y`).
    #[inline]
    pub fn mirror_x_axis(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Mirror across the y-axis (negates `x`).
    #[inline]
    pub fn mirror_y_axis(self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Multiply both components by `factor`.
    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Rotate by `degrees` around the origin.
    ///
    /// The resulting components are rounded to three decimal places, so
    /// rotating by 90° yields exact axis-aligned results.
    pub fn rotate(self, degrees: f64) -> Self {
        let rad = degrees * (PI / 180.0);
        let (sin, cos) = (rad.sin(), rad.cos());
        let rx = self.x * cos - self.y * sin;
        let ry = self.x * sin + self.y * cos;
        Self::new(round_milli(rx), round_milli(ry))
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Direction of the vector in degrees, in `[-180, 180]`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x) * (180.0 / PI)
    }

    /// Scale to unit length.
    ///
    /// The zero vector has no direction; normalizing it yields non-finite
    /// components. Callers must guard against that case.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len)
    }

    /// Distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Unit vector pointing from `other` towards `self`.
    ///
    /// Same caveat as [`normalize`](Self::normalize) when the two coincide.
    #[inline]
    pub fn direction_to(self, other: Self) -> Self {
        (self - other).normalize()
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Component-wise product.
impl Mul for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

/// Component-wise quotient. Division by a zero component is not caught.
impl Div for Vector2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl From<Vec2> for Vector2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    #[inline]
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2 {
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2> for Point {
    #[inline]
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;

    use super::Vector2;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Vector2::new(6.0, 8.0);
        let b = Vector2::new(2.0, -4.0);
        assert_eq!(a + b, Vector2::new(8.0, 4.0));
        assert_eq!(a - b, Vector2::new(4.0, 12.0));
        assert_eq!(a * b, Vector2::new(12.0, -32.0));
        assert_eq!(a / b, Vector2::new(3.0, -2.0));
        assert_eq!(a * 0.5, Vector2::new(3.0, 4.0));
        assert_eq!(-a, Vector2::new(-6.0, -8.0));
    }

    #[test]
    fn mirrors_flip_one_component() {
        let v = Vector2::new(3.0, -5.0);
        assert_eq!(v.mirror_x_axis(), Vector2::new(3.0, 5.0));
        assert_eq!(v.mirror_y_axis(), Vector2::new(-3.0, -5.0));
        assert_eq!(v.negate(), Vector2::new(-3.0, 5.0));
    }

    #[test]
    fn rotate_rounds_away_drift() {
        let v = Vector2::new(1.0, 0.0);
        assert_eq!(v.rotate(90.0), Vector2::new(0.0, 1.0));
        assert_eq!(v.rotate(180.0), Vector2::new(-1.0, 0.0));
        let r = Vector2::new(5.0, 5.0).rotate(45.0);
        assert_eq!(r, Vector2::new(0.0, 7.071));
    }

    #[test]
    fn rotate_rounds_negative_halves_up() {
        let r = Vector2::new(-0.0025, 0.0025).rotate(0.0);
        assert_eq!(r, Vector2::new(-0.002, 0.003));
    }

    #[test]
    fn length_angle_and_distance() {
        let v = Vector2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < EPSILON);
        assert!((Vector2::new(0.0, 2.0).angle() - 90.0).abs() < EPSILON);
        assert!((Vector2::new(-1.0, 0.0).angle() - 180.0).abs() < EPSILON);
        assert!((v.distance(Vector2::ZERO) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn normalize_unit_and_zero() {
        let n = Vector2::new(0.0, -3.0).normalize();
        assert!((n.length() - 1.0).abs() < EPSILON);
        assert_eq!(n, Vector2::new(0.0, -1.0));

        let z = Vector2::ZERO.normalize();
        assert!(!z.x.is_finite() && !z.y.is_finite());
    }

    #[test]
    fn direction_to_points_from_other() {
        let d = Vector2::new(10.0, 0.0).direction_to(Vector2::new(4.0, 0.0));
        assert_eq!(d, Vector2::new(1.0, 0.0));
    }

    #[test]
    fn kurbo_round_trip() {
        let p = kurbo::Point::new(1.5, 2.5);
        let v = Vector2::from(p);
        assert_eq!(kurbo::Point::from(v), p);
        assert_eq!(kurbo::Vec2::from(v), kurbo::Vec2::new(1.5, 2.5));
    }
}
