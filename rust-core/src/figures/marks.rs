// Small drawing marks shared by the gallery figures

use crate::config::{THIN_WIDTH_SCALE, Z_ANNOTATION, Z_LABEL};
use crate::geometries::Point;
use crate::render::{DrawCommand, Figure};
use crate::style::{Color, StrokeStyle, TextAnchor, TextStyle};

/// Thin dashed construction line (parallelogram sides, projections)
pub fn guide_line(figure: &mut Figure, from: impl Into<Point>, to: impl Into<Point>) {
    let width = figure.theme().stroke_width(THIN_WIDTH_SCALE);
    let stroke = StrokeStyle::new(figure.palette().text, width).dashed().with_opacity(0.5);
    figure.push_at(
        Z_ANNOTATION,
        DrawCommand::Polyline {
            points: vec![from.into(), to.into()],
            stroke,
        },
    );
}

/// Square corner mark at `corner` between unit directions `a` and `b`
pub fn right_angle_mark(figure: &mut Figure, corner: Point, a: Point, b: Point, size: f64) {
    let stroke = StrokeStyle::new(figure.palette().gray, figure.theme().stroke_width(THIN_WIDTH_SCALE));
    figure.push_at(
        Z_ANNOTATION,
        DrawCommand::Polyline {
            points: vec![corner + a * size, corner + (a + b) * size, corner + b * size],
            stroke,
        },
    );
}

/// Free-standing text in a given color
pub fn note(figure: &mut Figure, position: impl Into<Point>, text: &str, color: Color, size: f64) {
    figure.push_at(
        Z_LABEL,
        DrawCommand::Text {
            position: position.into(),
            text: text.to_string(),
            style: TextStyle::new(color, size),
        },
    );
}

/// Left-aligned text, used for side captions
pub fn caption(figure: &mut Figure, position: impl Into<Point>, text: &str, color: Color, size: f64) {
    figure.push_at(
        Z_LABEL,
        DrawCommand::Text {
            position: position.into(),
            text: text.to_string(),
            style: TextStyle::new(color, size).anchored(TextAnchor::Start),
        },
    );
}
