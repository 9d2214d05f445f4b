// Ceiling: a hatched support bar that hanging objects attach to from below

use crate::config::{
    CEILING_HATCH_SPACING, DEFAULT_CEILING_DEPTH, HEAVY_WIDTH_SCALE, MAX_HATCH_LINES, THIN_WIDTH_SCALE, Z_SURFACE,
};
use crate::geometries::Point;
use crate::objects::PlacedObject;
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::StrokeStyle;

/// Horizontal ceiling whose underside is at height `y`
///
/// Not a [`super::Surface`]: nothing rests on a ceiling, ropes hang from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ceiling {
    y: f64,
    x_min: f64,
    x_max: f64,
    depth: f64,
}

impl Ceiling {
    pub fn new(y: f64, xlim: (f64, f64)) -> Self {
        Self {
            y,
            x_min: xlim.0.min(xlim.1),
            x_max: xlim.0.max(xlim.1),
            depth: DEFAULT_CEILING_DEPTH,
        }
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth.abs();
        self
    }

    /// Attachment point at fraction `t` along the underside
    pub fn anchor_at(&self, t: f64) -> Point {
        Point::new(self.x_min + t * (self.x_max - self.x_min), self.y)
    }

    pub fn hatch_lines(&self) -> Vec<(Point, Point)> {
        let count = (((self.x_max - self.x_min) / CEILING_HATCH_SPACING).ceil() as usize).min(MAX_HATCH_LINES);
        (0..count)
            .map(|i| self.x_min + i as f64 * CEILING_HATCH_SPACING)
            .filter(|&x| x < self.x_max)
            .map(|x| {
                (
                    Point::new(x, self.y),
                    Point::new(x + CEILING_HATCH_SPACING, self.y + self.depth),
                )
            })
            .collect()
    }
}

impl PlacedObject for Ceiling {
    fn center(&self) -> Point {
        Point::new((self.x_min + self.x_max) / 2.0, self.y + self.depth / 2.0)
    }

    fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    fn height(&self) -> f64 {
        self.depth
    }
}

impl Drawable for Ceiling {
    fn draw(&self, figure: &mut Figure) {
        let ink = figure.palette().text;
        let (edge, hatch) = (
            figure.theme().stroke_width(HEAVY_WIDTH_SCALE),
            figure.theme().stroke_width(THIN_WIDTH_SCALE),
        );
        figure.push_at(
            Z_SURFACE,
            DrawCommand::Polyline {
                points: vec![Point::new(self.x_min, self.y), Point::new(self.x_max, self.y)],
                stroke: StrokeStyle::new(ink, edge),
            },
        );
        for (a, b) in self.hatch_lines() {
            figure.push_at(
                Z_SURFACE,
                DrawCommand::Polyline {
                    points: vec![a, b],
                    stroke: StrokeStyle::new(ink, hatch),
                },
            );
        }
    }
}
