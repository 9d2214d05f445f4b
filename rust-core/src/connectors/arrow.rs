// Force / vector arrows and their decomposition along a surface frame

use crate::config::{ARROW_HEAD_LENGTH_PX, DEFAULT_LABEL_OFFSET, Z_ARROW, Z_LABEL};
use crate::geometries::{Point, Transform2D};
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::{Color, StrokeStyle, TextStyle};

/// Straight vector arrow with an optional bold label beside its midpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    start: Point,
    end: Point,
    color: Color,
    label: Option<String>,
    label_offset: Point,
    line_width: Option<f64>,
    font_size: f64,
}

impl Arrow {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>, color: Color) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            color,
            label: None,
            label_offset: DEFAULT_LABEL_OFFSET.into(),
            line_width: None,
            font_size: 12.0,
        }
    }

    /// Arrow for `vector` drawn with its tail at `origin`
    pub fn from_vector(origin: impl Into<Point>, vector: impl Into<Point>, color: Color) -> Self {
        let origin = origin.into();
        Self::new(origin, origin + vector.into(), color)
    }

    pub fn with_label(mut self, label: impl Into<String>, offset: impl Into<Point>) -> Self {
        self.label = Some(label.into());
        self.label_offset = offset.into();
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn vector(&self) -> Point {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    pub fn label_position(&self) -> Point {
        self.start.midpoint(self.end) + self.label_offset
    }
}

impl Drawable for Arrow {
    fn draw(&self, figure: &mut Figure) {
        let width = self.line_width.unwrap_or(figure.theme().default_line_width);
        figure.push_at(
            Z_ARROW,
            DrawCommand::Arrow {
                start: self.start,
                end: self.end,
                stroke: StrokeStyle::new(self.color, width),
                head_length: ARROW_HEAD_LENGTH_PX,
            },
        );
        if let Some(label) = &self.label {
            figure.push_at(
                Z_LABEL,
                DrawCommand::Text {
                    position: self.label_position(),
                    text: label.clone(),
                    style: TextStyle::new(self.color, self.font_size).bold(),
                },
            );
        }
    }
}

/// A vector split into parts along and across a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorComponents {
    /// World-space part along the frame tangent
    pub tangential: Point,
    /// World-space part along the frame normal
    pub normal: Point,
    /// Signed length along the tangent
    pub parallel: f64,
    /// Signed length along the normal
    pub perpendicular: f64,
}

impl VectorComponents {
    /// Recombine into the original vector
    pub fn sum(&self) -> Point {
        self.tangential + self.normal
    }
}

/// Project `vector` onto the tangent and normal of `frame`
pub fn decompose(vector: impl Into<Point>, frame: &Transform2D) -> VectorComponents {
    let vector = vector.into();
    let (tangent, normal) = (frame.tangent(), frame.normal());
    let parallel = vector.dot(tangent);
    let perpendicular = vector.dot(normal);
    VectorComponents {
        tangential: tangent * parallel,
        normal: normal * perpendicular,
        parallel,
        perpendicular,
    }
}
