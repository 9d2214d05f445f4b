// Rope: draw-time link between two accessor points

use log::debug;

use crate::config::{
    GEOMETRY_TOLERANCE, OUTLINE_WIDTH_SCALE, ROPE_FILL_OPACITY, ROPE_HALF_WIDTH, ROPE_TEXTURE_RISE, ROPE_TEXTURE_SPACING,
    ROPE_VERTICAL_THRESHOLD, THIN_WIDTH_SCALE, Z_ROPE,
};
use crate::geometries::Point;
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::{Color, ShapeStyle, StrokeStyle};

/// How a rope renders once its end constraints are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RopeKind {
    /// Coincident endpoints, nothing is drawn
    Degenerate,
    /// Near-vertical: a filled strip with twist texture
    Band,
    /// Anything else: a plain line
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rope {
    start: Point,
    end: Point,
    horizontal: bool,
    vertical: bool,
    half_width: f64,
    line_width: Option<f64>,
    texture: bool,
    color: Option<Color>,
}

impl Rope {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            horizontal: false,
            vertical: false,
            half_width: ROPE_HALF_WIDTH,
            line_width: None,
            texture: true,
            color: None,
        }
    }

    /// Force the end onto the start's height
    pub fn horizontal(mut self) -> Self {
        self.horizontal = true;
        self
    }

    /// Force the end onto the start's x coordinate
    pub fn vertical(mut self) -> Self {
        self.vertical = true;
        self
    }

    pub fn with_half_width(mut self, half_width: f64) -> Self {
        self.half_width = half_width.abs();
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_texture(mut self, texture: bool) -> Self {
        self.texture = texture;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// End point after the horizontal, then vertical, constraint
    pub fn resolved_end(&self) -> Point {
        let mut end = self.end;
        if self.horizontal {
            end.y = self.start.y;
        }
        if self.vertical {
            end.x = self.start.x;
        }
        end
    }

    pub fn kind(&self) -> RopeKind {
        let end = self.resolved_end();
        if self.start.distance_to(end) < GEOMETRY_TOLERANCE {
            RopeKind::Degenerate
        } else if (end.x - self.start.x).abs() < ROPE_VERTICAL_THRESHOLD {
            RopeKind::Band
        } else {
            RopeKind::Line
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.resolved_end())
    }

    /// Heights of the diagonal twist strokes along a band rope
    pub fn texture_heights(&self) -> Vec<f64> {
        let end = self.resolved_end();
        let (low, high) = (self.start.y.min(end.y), self.start.y.max(end.y));
        (0..)
            .map(|i| low + i as f64 * ROPE_TEXTURE_SPACING)
            .take_while(|y| *y < high)
            .collect()
    }

    fn draw_band(&self, figure: &mut Figure, color: Color) {
        let end = self.resolved_end();
        let x = self.start.x;
        let w = self.half_width;
        let (low, high) = (self.start.y.min(end.y), self.start.y.max(end.y));
        let ink = StrokeStyle::new(figure.palette().rope_texture, figure.theme().stroke_width(THIN_WIDTH_SCALE));

        figure.push_at(
            Z_ROPE,
            DrawCommand::Polygon {
                points: vec![
                    Point::new(x - w, low),
                    Point::new(x + w, low),
                    Point::new(x + w, high),
                    Point::new(x - w, high),
                ],
                style: ShapeStyle::filled(color).with_fill_opacity(ROPE_FILL_OPACITY),
            },
        );
        if self.texture {
            for y in self.texture_heights() {
                figure.push_at(
                    Z_ROPE,
                    DrawCommand::Polyline {
                        points: vec![Point::new(x - w, y), Point::new(x + w, y + ROPE_TEXTURE_RISE)],
                        stroke: ink,
                    },
                );
            }
        }
        for edge in [x - w, x + w] {
            figure.push_at(
                Z_ROPE,
                DrawCommand::Polyline {
                    points: vec![Point::new(edge, self.start.y), Point::new(edge, end.y)],
                    stroke: ink,
                },
            );
        }
    }
}

impl Drawable for Rope {
    fn draw(&self, figure: &mut Figure) {
        let color = self.color.unwrap_or(figure.palette().rope);
        let width = self
            .line_width
            .unwrap_or_else(|| figure.theme().stroke_width(OUTLINE_WIDTH_SCALE));
        match self.kind() {
            RopeKind::Degenerate => {
                debug!("Skipping zero-length rope at {}", self.start);
            }
            RopeKind::Band => self.draw_band(figure, color),
            RopeKind::Line => {
                figure.push_at(
                    Z_ROPE,
                    DrawCommand::Polyline {
                        points: vec![self.start, self.resolved_end()],
                        stroke: StrokeStyle::new(color, width),
                    },
                );
            }
        }
    }
}
