use crate::geometries::Point;

/// Common accessor points of anything placed in a diagram
///
/// The provided methods are the axis-aligned defaults built from the center and
/// size. Rotated shapes such as [`crate::objects::Block`] override them with
/// edge midpoints of the rotated outline.
pub trait PlacedObject {
    fn center(&self) -> Point;
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn top(&self) -> Point {
        self.center() + (0.0, self.height() / 2.0)
    }

    fn bottom(&self) -> Point {
        self.center() - (0.0, self.height() / 2.0)
    }

    fn left(&self) -> Point {
        self.center() - (self.width() / 2.0, 0.0)
    }

    fn right(&self) -> Point {
        self.center() + (self.width() / 2.0, 0.0)
    }

    fn top_left(&self) -> Point {
        self.center() + (-self.width() / 2.0, self.height() / 2.0)
    }

    fn top_right(&self) -> Point {
        self.center() + (self.width() / 2.0, self.height() / 2.0)
    }

    fn bottom_left(&self) -> Point {
        self.center() - (self.width() / 2.0, self.height() / 2.0)
    }

    fn bottom_right(&self) -> Point {
        self.center() + (self.width() / 2.0, -self.height() / 2.0)
    }

    /// Point on the left side at height `y`
    fn left_at(&self, y: f64) -> Point {
        Point::new(self.center().x - self.width() / 2.0, y)
    }

    /// Point on the right side at height `y`
    fn right_at(&self, y: f64) -> Point {
        Point::new(self.center().x + self.width() / 2.0, y)
    }

    /// Point on the top side at abscissa `x`
    fn top_at(&self, x: f64) -> Point {
        Point::new(x, self.center().y + self.height() / 2.0)
    }

    /// Point on the bottom side at abscissa `x`
    fn bottom_at(&self, x: f64) -> Point {
        Point::new(x, self.center().y - self.height() / 2.0)
    }
}
