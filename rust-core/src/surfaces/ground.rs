// Flat ground: a hatched horizontal surface with a filled body below it

use super::surface::Surface;
use crate::config::{
    DEFAULT_GROUND_DEPTH, DEFAULT_HATCH_SPACING, GROUND_FILL_OPACITY, HAIRLINE_WIDTH_SCALE, HATCH_SLANT,
    MAX_HATCH_LINES, OUTLINE_WIDTH_SCALE, Z_SURFACE,
};
use crate::geometries::{Point, Transform2D};
use crate::objects::PlacedObject;
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::{Color, ShapeStyle, StrokeStyle};

/// Horizontal ground line at height `y` spanning `[x_min, x_max]`
#[derive(Debug, Clone, PartialEq)]
pub struct Ground {
    y: f64,
    x_min: f64,
    x_max: f64,
    depth: f64,
    hatch_spacing: f64,
    fill: Option<Color>,
}

impl Ground {
    /// The extent is normalized so that `x_min <= x_max`
    pub fn new(y: f64, xlim: (f64, f64)) -> Self {
        Self {
            y,
            x_min: xlim.0.min(xlim.1),
            x_max: xlim.0.max(xlim.1),
            depth: DEFAULT_GROUND_DEPTH,
            hatch_spacing: DEFAULT_HATCH_SPACING,
            fill: None,
        }
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth.abs();
        self
    }

    /// Non-positive spacing disables hatching
    pub fn with_hatch_spacing(mut self, spacing: f64) -> Self {
        self.hatch_spacing = spacing;
        self
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Height of the walkable line
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn x_limits(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Slanted hatch segments, one every `hatch_spacing` starting at `x_min`
    ///
    /// Spacing widens as needed so there are never more than `MAX_HATCH_LINES`.
    pub fn hatch_lines(&self) -> Vec<(Point, Point)> {
        if self.hatch_spacing <= 0.0 {
            return Vec::new();
        }
        let span = self.x_max - self.x_min;
        let spacing = self.hatch_spacing.max(span / MAX_HATCH_LINES as f64);
        let count = ((span / spacing).ceil() as usize).min(MAX_HATCH_LINES);
        (0..count)
            .map(|i| self.x_min + i as f64 * spacing)
            .filter(|&x| x < self.x_max)
            .map(|x| (Point::new(x, self.y), Point::new(x + HATCH_SLANT, self.y - self.depth)))
            .collect()
    }
}

impl Surface for Ground {
    fn surface_transform(&self, t: f64) -> Transform2D {
        let x = self.x_min + t * (self.x_max - self.x_min);
        Transform2D::new((x, self.y), 0.0)
    }
}

impl PlacedObject for Ground {
    fn center(&self) -> Point {
        Point::new((self.x_min + self.x_max) / 2.0, self.y - self.depth / 2.0)
    }

    fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    fn height(&self) -> f64 {
        self.depth
    }
}

impl Drawable for Ground {
    fn draw(&self, figure: &mut Figure) {
        let fill = self.fill.unwrap_or(figure.palette().ground);
        let line = figure.palette().text;
        let (edge, hatch) = (
            figure.theme().stroke_width(OUTLINE_WIDTH_SCALE),
            figure.theme().stroke_width(HAIRLINE_WIDTH_SCALE),
        );
        let body = vec![
            Point::new(self.x_min, self.y - self.depth),
            Point::new(self.x_max, self.y - self.depth),
            Point::new(self.x_max, self.y),
            Point::new(self.x_min, self.y),
        ];

        figure.push_at(
            Z_SURFACE,
            DrawCommand::Polygon {
                points: body,
                style: ShapeStyle::filled(fill).with_fill_opacity(GROUND_FILL_OPACITY),
            },
        );
        figure.push_at(
            Z_SURFACE,
            DrawCommand::Polyline {
                points: vec![Point::new(self.x_min, self.y), Point::new(self.x_max, self.y)],
                stroke: StrokeStyle::new(line, edge),
            },
        );
        for (a, b) in self.hatch_lines() {
            figure.push_at(
                Z_SURFACE,
                DrawCommand::Polyline {
                    points: vec![a, b],
                    stroke: StrokeStyle::new(line, hatch),
                },
            );
        }
    }
}
