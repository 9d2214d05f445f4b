use std::fmt::Debug;

use crate::geometries::{Point, Transform2D};

/// A support that objects can be placed on
///
/// `t` runs from 0 at the geometrically left end to 1 at the right end. The
/// returned frame has its origin on the surface, its x' axis along the surface
/// towards the right and its y' axis along the outward normal.
pub trait Surface: Debug {
    fn surface_transform(&self, t: f64) -> Transform2D;

    fn point_on_surface(&self, t: f64) -> Point {
        self.surface_transform(t).origin()
    }
}
