// Display-list commands: world-space primitives recorded by drawables and consumed by backends

use serde::{Deserialize, Serialize};

use crate::config::{ARC_SEGMENTS, Z_ANNOTATION, Z_ARROW, Z_LABEL, Z_OBJECT, Z_ROPE};
use crate::geometries::Point;
use crate::style::{Color, ShapeStyle, StrokeStyle, TextStyle};

/// One drawing primitive in world coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Polygon {
        points: Vec<Point>,
        style: ShapeStyle,
    },
    Circle {
        center: Point,
        radius: f64,
        style: ShapeStyle,
    },
    Polyline {
        points: Vec<Point>,
        stroke: StrokeStyle,
    },
    /// Straight arrow; `head_length` is in pixels
    Arrow {
        start: Point,
        end: Point,
        stroke: StrokeStyle,
        head_length: f64,
    },
    /// Circular arc from `start_deg` to `end_deg`, counterclockwise
    Arc {
        center: Point,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
        stroke: StrokeStyle,
    },
    Text {
        position: Point,
        text: String,
        style: TextStyle,
    },
    /// Filled dot with a pixel size, independent of zoom
    Marker {
        position: Point,
        size: f64,
        color: Color,
    },
}

impl DrawCommand {
    /// Draw order used by [`crate::render::Figure::push`]
    pub fn default_z(&self) -> i32 {
        match self {
            DrawCommand::Polygon { .. } | DrawCommand::Circle { .. } => Z_OBJECT,
            DrawCommand::Polyline { .. } => Z_ROPE,
            DrawCommand::Arc { .. } => Z_ANNOTATION,
            DrawCommand::Arrow { .. } | DrawCommand::Marker { .. } => Z_ARROW,
            DrawCommand::Text { .. } => Z_LABEL,
        }
    }

    /// World-space points that bound the primitive
    ///
    /// Text and markers only contribute their anchor point.
    pub fn extent_points(&self) -> Vec<Point> {
        match self {
            DrawCommand::Polygon { points, .. } | DrawCommand::Polyline { points, .. } => points.clone(),
            DrawCommand::Circle { center, radius, .. } => vec![
                *center - (*radius, *radius),
                *center + (*radius, *radius),
            ],
            DrawCommand::Arrow { start, end, .. } => vec![*start, *end],
            DrawCommand::Arc {
                center,
                radius,
                start_deg,
                end_deg,
                ..
            } => arc_points(*center, *radius, *start_deg, *end_deg, ARC_SEGMENTS),
            DrawCommand::Text { position, .. } | DrawCommand::Marker { position, .. } => vec![*position],
        }
    }
}

/// A command together with its draw order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawItem {
    pub z: i32,
    #[serde(flatten)]
    pub command: DrawCommand,
}

/// Tessellate a counterclockwise arc into `segments + 1` points
pub fn arc_points(center: Point, radius: f64, start_deg: f64, end_deg: f64, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    let start = start_deg.to_radians();
    let sweep = (end_deg - start_deg).to_radians();
    (0..=segments)
        .map(|i| {
            let a = start + sweep * i as f64 / segments as f64;
            center + Point::from_angle(a) * radius
        })
        .collect()
}
