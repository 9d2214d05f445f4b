// Table: a raised flat slab whose top edge is the placement surface

use super::surface::Surface;
use crate::config::{GROUND_FILL_OPACITY, OUTLINE_WIDTH_SCALE, Z_SURFACE};
use crate::geometries::{Point, Transform2D};
use crate::objects::PlacedObject;
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::{Color, ShapeStyle, StrokeStyle};

/// Table top with lower-left corner `(x, y)`; objects rest on `y + height`
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: Option<Color>,
}

impl Table {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: None,
        }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Height of the placement surface
    pub fn top_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn x_limits(&self) -> (f64, f64) {
        (self.x, self.x + self.width)
    }
}

impl Surface for Table {
    fn surface_transform(&self, t: f64) -> Transform2D {
        Transform2D::new((self.x + t * self.width, self.top_y()), 0.0)
    }
}

impl PlacedObject for Table {
    fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

impl Drawable for Table {
    fn draw(&self, figure: &mut Figure) {
        let fill = self.fill.unwrap_or(figure.palette().ground);
        let edge = StrokeStyle::new(figure.palette().text, figure.theme().stroke_width(OUTLINE_WIDTH_SCALE));
        let points = vec![
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
            self.top_left(),
        ];
        figure.push_at(
            Z_SURFACE,
            DrawCommand::Polygon {
                points,
                style: ShapeStyle::filled(fill)
                    .with_fill_opacity(GROUND_FILL_OPACITY)
                    .with_stroke(edge),
            },
        );
    }
}
