// Torque on a lever: position vector, perpendicular force and the out-of-page torque marker

use super::marks::{caption, note};
use crate::config::{Z_ANNOTATION, Z_OBJECT};
use crate::connectors::{Arrow, FormulaBox};
use crate::geometries::Point;
use crate::objects::{MassPoint, TorqueDirection, TorqueSymbol};
use crate::render::{DrawCommand, Figure};
use crate::style::{StrokeStyle, Theme};
use crate::Result;

pub fn torque(theme: &Theme) -> Result<Figure> {
    let mut figure = Figure::new(theme.clone())
        .with_title("Torque τ = r × F")
        .with_limits((-2.0, 10.0), (-1.5, 8.0))?;
    let palette = figure.palette().clone();

    let pivot = Point::new(1.0, 3.0);
    let lever_end = Point::new(8.0, 3.0);
    let r_end = Point::new(7.0, 3.0);

    figure.push_at(
        Z_OBJECT,
        DrawCommand::Polyline {
            points: vec![pivot, lever_end],
            stroke: StrokeStyle::new(palette.brown, 8.0),
        },
    );
    figure.add(&MassPoint::at(pivot).with_size(10.0));
    note(&mut figure, pivot - (0.0, 0.9), "pivot", palette.gray, 12.0);

    figure.add(&Arrow::new(pivot, r_end, palette.blue).with_label("r", (0.0, -0.6)).with_line_width(3.0));
    figure.add(&Arrow::new(r_end, (7.0, 6.0), palette.red).with_label("F", (0.5, 0.0)).with_line_width(4.0));

    // sense of rotation
    figure.push_at(
        Z_ANNOTATION,
        DrawCommand::Arc {
            center: pivot,
            radius: 1.5,
            start_deg: 0.0,
            end_deg: 60.0,
            stroke: StrokeStyle::new(palette.green, 3.0),
        },
    );
    note(&mut figure, (3.2, 5.0), "τ", palette.green, 20.0);

    figure.add(&TorqueSymbol::new(r_end, 0.3, TorqueDirection::Out).with_color(palette.green));
    caption(&mut figure, (7.5, 2.4), "out of page", palette.green, 11.0);

    // moment arm
    let arm_y = 1.6;
    let mid = Point::new((pivot.x + r_end.x) / 2.0, arm_y);
    figure.add(&Arrow::new(mid, (pivot.x, arm_y), palette.gray).with_line_width(1.5));
    figure.add(&Arrow::new(mid, (r_end.x, arm_y), palette.gray).with_line_width(1.5));
    note(&mut figure, mid - (0.0, 0.5), "r (moment arm)", palette.gray, 14.0);

    figure.add(&FormulaBox::new((5.0, 7.2), "τ = r × F").with_font_size(20.0));
    Ok(figure)
}
