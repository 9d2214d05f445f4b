// 2D bounding box module: axis-aligned extents of drawn content
// Used to fit figure limits around everything that was drawn

use super::point::Point;

/// 2D axis-aligned bounding box
///
/// Represents a rectangular region defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum corner (bottom-left in world coordinates)
    pub min: Point,
    /// Maximum corner (top-right in world coordinates)
    pub max: Point,
}

impl BoundingBox2D {
    /// Create a new bounding box from minimum and maximum corners
    ///
    /// # Panics
    /// Panics in debug mode if min coordinates are greater than max coordinates
    pub fn new(min: Point, max: Point) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y,
            "Minimum coordinates must be less than or equal to maximum coordinates"
        );
        Self { min, max }
    }

    /// Create a bounding box from a center point and half extents
    pub fn from_center_half_extents(center: Point, half_width: f64, half_height: f64) -> Self {
        Self {
            min: center - (half_width, half_height),
            max: center + (half_width, half_height),
        }
    }

    /// Create a bounding box from a collection of points
    ///
    /// # Returns
    /// * `Some(BoundingBox2D)` if there are points to bound
    /// * `None` if the iterator is empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points_iter = points.into_iter();
        let first = points_iter.next()?;

        Some(points_iter.fold(Self { min: first, max: first }, |acc, p| acc.include(p)))
    }

    /// Grow the box so that it also covers `point`
    pub fn include(&self, point: Point) -> BoundingBox2D {
        BoundingBox2D {
            min: Point::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Point::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    /// Check if a point is inside the bounding box (inclusive of boundaries)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Compute the union of this bounding box with another
    pub fn union(&self, other: &BoundingBox2D) -> BoundingBox2D {
        self.include(other.min).include(other.max)
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Expand the bounding box by a given margin in all directions
    pub fn expand(&self, margin: f64) -> BoundingBox2D {
        BoundingBox2D {
            min: self.min - (margin, margin),
            max: self.max + (margin, margin),
        }
    }

    /// Limits as `((x_min, x_max), (y_min, y_max))`
    pub fn limits(&self) -> ((f64, f64), (f64, f64)) {
        ((self.min.x, self.max.x), (self.min.y, self.max.y))
    }
}
