// Point module: immutable 2D point/vector used by every placement and drawing call
// All arithmetic returns a new value; nothing mutates a point in place.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{DiagramError, Result};

/// 2D point or free vector in world (or local frame) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle` radians (counterclockwise from +x)
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: impl Into<Point>) -> f64 {
        let other = other.into();
        (other - *self).norm()
    }

    /// Direction angle from this point towards `other`, in radians
    pub fn angle_to(&self, other: impl Into<Point>) -> f64 {
        let other = other.into();
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Length of the point seen as a vector from the origin
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector
    pub fn normalized(&self) -> Option<Point> {
        let n = self.norm();
        if n < crate::config::GEOMETRY_TOLERANCE {
            None
        } else {
            Some(Point::new(self.x / n, self.y / n))
        }
    }

    /// Midpoint between this point and `other`
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Scalar division that refuses a zero divisor instead of producing infinities
    pub fn try_div(&self, divisor: f64) -> Result<Point> {
        if divisor == 0.0 {
            return Err(DiagramError::DivisionByZero);
        }
        Ok(Point::new(self.x / divisor, self.y / divisor))
    }

    /// Approximate equality within `tol` on both components
    pub fn approx_eq(&self, other: Point, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
    }

    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({:.2}, {:.2})", self.x, self.y)
    }
}

// ======================== CONVERSIONS ========================

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        p.to_tuple()
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        p.to_array()
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = DiagramError;

    fn try_from(values: &[f64]) -> Result<Self> {
        match values {
            [x, y] => Ok(Point::new(*x, *y)),
            _ => Err(DiagramError::InvalidPoint(values.len())),
        }
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = DiagramError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Point::try_from(values.as_slice())
    }
}

// ======================== ARITHMETIC ========================

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Add<(f64, f64)> for Point {
    type Output = Point;

    fn add(self, (dx, dy): (f64, f64)) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Sub<(f64, f64)> for Point {
    type Output = Point;

    fn sub(self, (dx, dy): (f64, f64)) -> Point {
        Point::new(self.x - dx, self.y - dy)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, p: Point) -> Point {
        p * self
    }
}

impl Div<f64> for Point {
    type Output = Point;

    /// # Panics
    /// Panics if `k` is zero; use [`Point::try_div`] to handle that case.
    fn div(self, k: f64) -> Point {
        assert!(k != 0.0, "Cannot divide a point by zero");
        Point::new(self.x / k, self.y / k)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}
