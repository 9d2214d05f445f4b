use std::str::FromStr;

use super::placed_object::PlacedObject;
use crate::config::{HEAVY_WIDTH_SCALE, Z_ANNOTATION};
use crate::geometries::Point;
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::{Color, ShapeStyle, StrokeStyle};
use crate::DiagramError;

/// Rotation axis direction relative to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorqueDirection {
    /// Out of the page (⊙), counterclockwise
    Out,
    /// Into the page (⊗), clockwise
    In,
}

impl FromStr for TorqueDirection {
    type Err = DiagramError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "out" => Ok(TorqueDirection::Out),
            "in" => Ok(TorqueDirection::In),
            other => Err(DiagramError::InvalidParameter(format!(
                "torque direction must be 'in' or 'out', got '{}'",
                other
            ))),
        }
    }
}

/// ⊙ / ⊗ marker for the direction of a torque vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorqueSymbol {
    center: Point,
    radius: f64,
    direction: TorqueDirection,
    color: Option<Color>,
}

impl TorqueSymbol {
    pub fn new(center: impl Into<Point>, radius: f64, direction: TorqueDirection) -> Self {
        Self {
            center: center.into(),
            radius,
            direction,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn direction(&self) -> TorqueDirection {
        self.direction
    }
}

impl PlacedObject for TorqueSymbol {
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

impl Drawable for TorqueSymbol {
    fn draw(&self, figure: &mut Figure) {
        let color = self.color.unwrap_or(figure.palette().purple);
        let stroke = StrokeStyle::new(color, figure.theme().stroke_width(HEAVY_WIDTH_SCALE));

        figure.push_at(
            Z_ANNOTATION,
            DrawCommand::Circle {
                center: self.center,
                radius: self.radius,
                style: ShapeStyle::outline(stroke),
            },
        );
        match self.direction {
            TorqueDirection::Out => {
                figure.push_at(
                    Z_ANNOTATION + 1,
                    DrawCommand::Marker {
                        position: self.center,
                        size: 3.0,
                        color,
                    },
                );
            }
            TorqueDirection::In => {
                let d = self.radius * 0.6;
                for (a, b) in [((-d, -d), (d, d)), ((-d, d), (d, -d))] {
                    figure.push_at(
                        Z_ANNOTATION + 1,
                        DrawCommand::Polyline {
                            points: vec![self.center + a, self.center + b],
                            stroke,
                        },
                    );
                }
            }
        }
    }
}
