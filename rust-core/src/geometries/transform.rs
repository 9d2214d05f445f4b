// 2D transformation module: rigid local frames used to place objects on surfaces
// A frame is an origin plus a rotation; local x' runs along the tangent, local y' along the normal.

use nalgebra::{Matrix3, Rotation2};

use super::point::Point;
use crate::config::GEOMETRY_TOLERANCE;

/// 2D rigid transformation (rotation followed by translation)
///
/// Represents a local coordinate frame anchored at `origin` and rotated by
/// `angle` radians (counterclockwise). The angle is fixed at construction, so
/// `local_to_world` and `world_to_local` are exact inverses of each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    origin: Point,
    angle: f64,
    rotation: Rotation2<f64>,
}

impl Transform2D {
    /// Create a frame at `origin` rotated by `angle` radians
    ///
    /// # Arguments
    /// * `origin` - Frame origin in world coordinates
    /// * `angle` - Rotation angle in radians (counterclockwise)
    pub fn new(origin: impl Into<Point>, angle: f64) -> Self {
        Self {
            origin: origin.into(),
            angle,
            rotation: Rotation2::new(angle),
        }
    }

    /// Create a frame whose rotation is given in degrees
    pub fn from_degrees(origin: impl Into<Point>, angle_deg: f64) -> Self {
        Self::new(origin, angle_deg.to_radians())
    }

    /// Create the identity frame (world origin, no rotation)
    pub fn identity() -> Self {
        Self::new(Point::ORIGIN, 0.0)
    }

    /// Create a translation-only frame
    pub fn translation(origin: impl Into<Point>) -> Self {
        Self::new(origin, 0.0)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Rotation angle in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Rotation angle in degrees
    pub fn angle_deg(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// Unit vector of the local x' axis in world coordinates: (cos θ, sin θ)
    pub fn tangent(&self) -> Point {
        Point::new(self.angle.cos(), self.angle.sin())
    }

    /// Unit vector of the local y' axis in world coordinates: (-sin θ, cos θ)
    pub fn normal(&self) -> Point {
        Point::new(-self.angle.sin(), self.angle.cos())
    }

    /// Convert a point from local frame coordinates to world coordinates
    ///
    /// `world = origin + R(θ) · p`
    pub fn local_to_world(&self, local: impl Into<Point>) -> Point {
        let local: Point = local.into();
        self.origin + Point::from(self.rotation * local.to_vector())
    }

    /// Convert a point from world coordinates to local frame coordinates
    ///
    /// Inverse of [`Transform2D::local_to_world`]: untranslate, then unrotate.
    pub fn world_to_local(&self, world: impl Into<Point>) -> Point {
        let world: Point = world.into();
        let translated = world - self.origin;
        Point::from(self.rotation.inverse() * translated.to_vector())
    }

    /// Rotate a direction vector into world coordinates (translation ignored)
    pub fn local_vector_to_world(&self, vector: impl Into<Point>) -> Point {
        let vector: Point = vector.into();
        Point::from(self.rotation * vector.to_vector())
    }

    /// Rotate a world direction vector into the local frame (translation ignored)
    pub fn world_vector_to_local(&self, vector: impl Into<Point>) -> Point {
        let vector: Point = vector.into();
        Point::from(self.rotation.inverse() * vector.to_vector())
    }

    /// Compose this frame with another one
    ///
    /// The result maps a point through `self` first, then through `other`.
    pub fn then(&self, other: &Transform2D) -> Transform2D {
        Transform2D::new(
            other.local_to_world(self.origin),
            self.angle + other.angle,
        )
    }

    /// Inverse frame: maps world coordinates back into this frame's local coordinates
    pub fn inverse(&self) -> Transform2D {
        Transform2D::new(
            Point::from(self.rotation.inverse() * (-self.origin).to_vector()),
            -self.angle,
        )
    }

    /// Convert to a 3x3 homogeneous matrix
    #[rustfmt::skip]
    pub fn to_matrix(&self) -> Matrix3<f64> {
        let cos_r = self.angle.cos();
        let sin_r = self.angle.sin();

        Matrix3::new(
            cos_r, -sin_r, self.origin.x,
            sin_r,  cos_r, self.origin.y,
            0.0,    0.0,   1.0,
        )
    }

    /// Check if this is the identity frame
    pub fn is_identity(&self) -> bool {
        self.origin.norm() < GEOMETRY_TOLERANCE && self.angle.abs() < GEOMETRY_TOLERANCE
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}
