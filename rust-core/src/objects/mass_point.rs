use super::placed_object::PlacedObject;
use crate::config::Z_ARROW;
use crate::geometries::Point;
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::Color;

/// Zero-size point mass drawn as a dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassPoint {
    center: Point,
    /// Dot radius in pixels
    size: f64,
    color: Option<Color>,
}

impl MassPoint {
    pub fn at(point: impl Into<Point>) -> Self {
        Self {
            center: point.into(),
            size: 6.0,
            color: None,
        }
    }

    /// Snap onto another object's center
    pub fn on(object: &dyn PlacedObject) -> Self {
        Self::at(object.center())
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl PlacedObject for MassPoint {
    fn center(&self) -> Point {
        self.center
    }

    fn width(&self) -> f64 {
        0.0
    }

    fn height(&self) -> f64 {
        0.0
    }
}

impl Drawable for MassPoint {
    fn draw(&self, figure: &mut Figure) {
        let color = self.color.unwrap_or(figure.palette().text);
        figure.push_at(
            Z_ARROW + 1,
            DrawCommand::Marker {
                position: self.center,
                size: self.size,
                color,
            },
        );
    }
}
