// src/geometry.rs

//! 2D vector arithmetic shared by the edge, shape and generator modules.
//!
//! `Point2` is an alias of `Vector2`; positions and directions use the same
//! representation and the same operators.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A two-dimensional vector in shape space (double precision).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// A position in shape space.
pub type Point2 = Vector2;

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of the two vectors.
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Unit vector in the same direction. A zero vector maps to `(0, 1)`
    /// unless `allow_zero` is set, in which case it stays zero.
    pub fn normalize_or(self, allow_zero: bool) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Self::new(0.0, if allow_zero { 0.0 } else { 1.0 });
        }
        Self::new(self.x / len, self.y / len)
    }

    #[inline]
    pub fn normalize(self) -> Self {
        self.normalize_or(false)
    }

    /// Unit vector perpendicular to this one.
    ///
    /// With `polarity == true` the result is rotated a quarter turn
    /// counter-clockwise, `(-y, x)`; otherwise clockwise, `(y, -x)`.
    pub fn orthonormal(self, polarity: bool) -> Self {
        let len = self.length();
        if len == 0.0 {
            return if polarity {
                Self::new(0.0, 1.0)
            } else {
                Self::new(0.0, -1.0)
            };
        }
        if polarity {
            Self::new(-self.y / len, self.x / len)
        } else {
            Self::new(self.y / len, -self.x / len)
        }
    }
}

/// Axis-aligned bounding box as `(left, bottom, right, top)` in shape space.
///
/// The empty box has `left = bottom = +inf` and `right = top = -inf`, so that
/// including any point makes it non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub l: f64,
    pub b: f64,
    pub r: f64,
    pub t: f64,
}

impl Bounds {
    pub const EMPTY: Self = Self {
        l: f64::INFINITY,
        b: f64::INFINITY,
        r: f64::NEG_INFINITY,
        t: f64::NEG_INFINITY,
    };

    pub const fn new(l: f64, b: f64, r: f64, t: f64) -> Self {
        Self { l, b, r, t }
    }

    pub fn include_point(&mut self, p: Point2) {
        self.l = self.l.min(p.x);
        self.b = self.b.min(p.y);
        self.r = self.r.max(p.x);
        self.t = self.t.max(p.y);
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            l: self.l.min(other.l),
            b: self.b.min(other.b),
            r: self.r.max(other.r),
            t: self.t.max(other.t),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.l > self.r || self.b > self.t
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.r - self.l
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.t - self.b
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Linear interpolation `a + (b - a) * t`.
#[inline]
pub fn mix(a: Vector2, b: Vector2, t: f64) -> Vector2 {
    a + (b - a) * t
}

/// Returns `1.0` for positive input and `-1.0` otherwise (zero counts as negative).
#[inline]
pub fn non_zero_sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else {
        -1.0
    }
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// Componentwise division, used to map pixel coordinates into shape space.
impl Div<Vector2> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Vector2) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn orthonormal_handedness() {
        let v = Vector2::new(10.0, 0.0);
        assert_eq!(v.orthonormal(true), Vector2::new(0.0, 1.0));
        assert_eq!(v.orthonormal(false), Vector2::new(0.0, -1.0));
    }

    #[test]
    fn cross_sign_follows_turn_direction() {
        let right = Vector2::new(1.0, 0.0);
        let up = Vector2::new(0.0, 1.0);
        assert!(right.cross(up) > 0.0);
        assert!(up.cross(right) < 0.0);
    }

    #[test]
    fn normalize_zero_vector() {
        assert_eq!(Vector2::ZERO.normalize(), Vector2::new(0.0, 1.0));
        assert_eq!(Vector2::ZERO.normalize_or(true), Vector2::ZERO);
        let n = Vector2::new(3.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mix_and_componentwise_divide() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(6.0, 3.0);
        assert_eq!(mix(a, b, 0.5), Vector2::new(3.0, 1.5));
        assert_eq!(b / Vector2::new(2.0, 3.0), Vector2::new(3.0, 1.0));
    }

    #[test]
    fn bounds_grow_from_empty() {
        let mut bounds = Bounds::EMPTY;
        assert!(bounds.is_empty());
        assert_eq!(bounds.width(), 0.0);
        bounds.include_point(Vector2::new(2.0, -1.0));
        bounds.include_point(Vector2::new(-3.0, 4.0));
        assert_eq!(bounds, Bounds::new(-3.0, -1.0, 2.0, 4.0));
        assert_eq!(bounds.width(), 5.0);
        assert_eq!(bounds.height(), 5.0);
        assert_eq!(Bounds::EMPTY.union(bounds), bounds);
    }
}
