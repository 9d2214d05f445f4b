// Geometries module: points, rigid frames and bounding boxes
// This module provides the 2D primitives every surface, object and connector is built on

// ======================== MODULE DECLARATIONS ========================
pub mod bounding_box;
pub mod point;
pub mod transform;

mod _tests_point;

// ======================== POINT ========================
pub use point::Point; // struct - immutable 2D point/vector
// Point impl methods:
//   new(x: f64, y: f64) -> Self                             - creates point
//   from_angle(angle: f64) -> Self                          - unit vector at angle (radians)
//   distance_to(&self, other: impl Into<Point>) -> f64      - Euclidean distance
//   angle_to(&self, other: impl Into<Point>) -> f64         - atan2(dy, dx) towards other
//   dot(&self, other: Point) -> f64                         - dot product
//   norm(&self) -> f64                                      - vector length
//   normalized(&self) -> Option<Point>                      - unit vector, None for zero length
//   midpoint(&self, other: Point) -> Point                  - midpoint of a segment
//   try_div(&self, divisor: f64) -> Result<Point>           - division that rejects zero
//   approx_eq(&self, other: Point, tol: f64) -> bool        - componentwise comparison
//   to_tuple / to_array / to_vector                         - interop conversions
// Operators: Point ± Point, Point ± (f64, f64), Point * f64, f64 * Point, Point / f64 (panics on 0), -Point
// Conversions: From<(f64, f64)>, From<[f64; 2]>, From<Vector2<f64>>, TryFrom<&[f64]>, TryFrom<Vec<f64>>

// ======================== FRAMES ========================
pub use transform::Transform2D; // struct - rigid 2D frame (origin + rotation)
// Transform2D impl methods:
//   new(origin: impl Into<Point>, angle: f64) -> Self       - frame rotated by angle (radians)
//   from_degrees(origin, angle_deg: f64) -> Self            - frame rotated by angle (degrees)
//   identity() -> Self                                      - world frame
//   translation(origin) -> Self                             - translation-only frame
//   origin / angle / angle_deg                              - read-only frame parameters
//   tangent(&self) -> Point                                 - local x' axis (cos θ, sin θ)
//   normal(&self) -> Point                                  - local y' axis (-sin θ, cos θ)
//   local_to_world(&self, p) -> Point                       - origin + R(θ)·p
//   world_to_local(&self, p) -> Point                       - R(-θ)·(p - origin)
//   local_vector_to_world / world_vector_to_local           - rotation only
//   then(&self, other: &Transform2D) -> Transform2D         - apply self, then other
//   inverse(&self) -> Transform2D                           - inverse frame
//   to_matrix(&self) -> Matrix3<f64>                        - homogeneous matrix
//   is_identity(&self) -> bool                              - checks for identity frame

// ======================== GEOMETRIC UTILITIES ========================
pub use bounding_box::BoundingBox2D; // struct - 2D axis-aligned bounding box
// BoundingBox2D impl methods:
//   new(min: Point, max: Point) -> Self                     - creates bounding box from corners
//   from_center_half_extents(center, hw, hh) -> Self        - box around a center
//   from_points(points) -> Option<Self>                     - box containing all points
//   include(&self, point: Point) -> BoundingBox2D           - grows box to cover point
//   contains(&self, point: Point) -> bool                   - inclusive containment
//   union(&self, other: &BoundingBox2D) -> BoundingBox2D    - union of two boxes
//   center / width / height                                 - box measurements
//   expand(&self, margin: f64) -> BoundingBox2D             - grows box in all directions
//   limits(&self) -> ((f64, f64), (f64, f64))               - x and y limits
