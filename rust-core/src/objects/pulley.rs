// Pulley: rope anchor with a rim, placed explicitly or at the end of a surface

use log::debug;

use super::placed_object::PlacedObject;
use crate::config::{DEFAULT_PULLEY_RADIUS, OUTLINE_WIDTH_SCALE, PULLEY_INNER_RATIO, Z_OBJECT};
use crate::geometries::Point;
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::{Color, ShapeStyle, StrokeStyle};
use crate::surfaces::Surface;

/// Pulley wheel; accessors are axis-aligned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulley {
    center: Point,
    radius: f64,
}

impl Pulley {
    pub fn new(center: impl Into<Point>, radius: f64) -> Self {
        Self {
            center: center.into(),
            radius,
        }
    }

    /// Place a pulley just beyond the surface point at `t`
    ///
    /// The wheel sits outside the surface: towards the left for `t <= 0.5` and
    /// towards the right otherwise, lifted by its radius along the surface
    /// normal. Sized for `for_obj`, the radius is half the object's height so
    /// the wheel's center lines up with the object's mid-height rope point.
    pub fn at_surface(surface: &dyn Surface, t: f64, for_obj: Option<&dyn PlacedObject>) -> Self {
        let radius = for_obj.map_or(DEFAULT_PULLEY_RADIUS, |obj| obj.height() / 2.0);
        let outward = if t <= 0.5 { -radius } else { radius };
        let frame = surface.surface_transform(t);
        let center = frame.local_to_world((outward, radius));
        debug!("Pulley at surface t={} -> center {} radius {:.3}", t, center, radius);
        Self { center, radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Rim point facing `direction`; the center for a zero direction
    ///
    /// A rope aimed at a point on the line through the center leaves the wheel here,
    /// so a rope from a block's mid-height runs parallel to the block's surface.
    pub fn rim_point(&self, direction: impl Into<Point>) -> Point {
        direction
            .into()
            .normalized()
            .map_or(self.center, |dir| self.center + dir * self.radius)
    }

    /// Where a vertical rope leaves the wheel, on the side facing away from `from`
    pub fn hang_point(&self, from: impl Into<Point>) -> Point {
        let side = if from.into().x > self.center.x { -1.0 } else { 1.0 };
        self.center + (side * self.radius, 0.0)
    }
}

impl PlacedObject for Pulley {
    fn center(&self) -> Point {
        self.center
    }

    fn width(&self) -> f64 {
        2.0 * self.radius
    }

    fn height(&self) -> f64 {
        2.0 * self.radius
    }
}

impl Drawable for Pulley {
    fn draw(&self, figure: &mut Figure) {
        let outline = figure.theme().stroke_width(OUTLINE_WIDTH_SCALE);
        let rim = ShapeStyle::filled(Color::WHITE).with_stroke(StrokeStyle::new(figure.palette().text, outline));
        // Drawn above ropes so the rope ends tuck under the wheel
        figure.push_at(
            Z_OBJECT + 1,
            DrawCommand::Circle {
                center: self.center,
                radius: self.radius,
                style: rim,
            },
        );
        figure.push_at(
            Z_OBJECT + 1,
            DrawCommand::Circle {
                center: self.center,
                radius: self.radius * PULLEY_INNER_RATIO,
                style: rim,
            },
        );
    }
}
