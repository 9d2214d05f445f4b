// Free-body diagrams: resting, sliding, hanging and pushed blocks

use super::marks::{guide_line, note};
use crate::config::{DEFAULT_CIRCLE_RADIUS, DEFAULT_SURFACE_T};
use crate::connectors::{decompose, Arrow, CoordAxes, FormulaBox, Rope};
use crate::geometries::Point;
use crate::objects::{Anchor, Block, Circle, MassPoint, PlacedObject};
use crate::render::Figure;
use crate::style::Theme;
use crate::surfaces::{Ceiling, Ground, Incline, InclineShape, SlopeDirection};
use crate::Result;

/// Block in equilibrium on level ground: N up, W down
pub fn fbd_floor(theme: &Theme) -> Result<Figure> {
    let mut figure = Figure::new(theme.clone())
        .with_title("Block at rest on the floor")
        .with_limits((-3.0, 3.0), (-3.0, 4.0))?;
    let (red, blue) = (figure.palette().red, figure.palette().blue);

    let ground = Ground::new(-0.5, (-3.0, 3.0));
    let block = Block::new(1.6, 1.0, Anchor::on(&ground, DEFAULT_SURFACE_T)).with_label("m");

    figure.add(&ground).add(&block);
    figure.add(&Arrow::from_vector(block.top(), (0.0, 2.0), red).with_label("N", (0.5, 0.0)).with_line_width(3.0));
    figure.add(
        &Arrow::from_vector(block.bottom(), (0.0, -2.0), blue)
            .with_label("W = mg", (1.0, 0.0))
            .with_line_width(3.0),
    );
    figure.add(&FormulaBox::new((0.0, 3.3), "N + W = 0"));
    Ok(figure)
}

/// Block on a falling incline with its weight split along the slope frame
pub fn fbd_incline(theme: &Theme) -> Result<Figure> {
    let mut figure = Figure::new(theme.clone())
        .with_title("Forces on a block on an incline")
        .with_limits((-1.0, 9.0), (-1.5, 6.0))?;
    let palette = figure.palette().clone();

    let incline = Incline::new(
        (0.0, 0.0),
        SlopeDirection::Falling,
        InclineShape::WidthHeight { width: 8.0, height: 4.0 },
    )?;
    let block = Block::new(2.0, 1.0, Anchor::on(&incline, DEFAULT_SURFACE_T)).with_fill(palette.gray.lighten(0.7));
    let center = block.center();
    let frame = block.frame();

    figure.add(&incline).add(&block).add(&MassPoint::on(&block));
    figure.add(
        &CoordAxes::from_frame(&frame)
            .with_length(1.6)
            .with_labels("x'", "y'")
            .with_color(palette.gray),
    );

    let weight = Point::new(0.0, -2.0);
    let parts = decompose(weight, &frame);
    figure.add(&Arrow::from_vector(center, weight, palette.blue).with_label("W", (-0.5, 0.0)).with_line_width(3.0));
    figure.add(&Arrow::from_vector(center, parts.tangential, palette.green).with_label("W sinθ", (0.9, 0.2)));
    figure.add(&Arrow::from_vector(center, parts.normal, palette.purple).with_label("W cosθ", (-1.0, 0.0)));
    figure.add(&Arrow::from_vector(center, -parts.normal, palette.red).with_label("N", (0.4, 0.3)).with_line_width(3.0));

    guide_line(&mut figure, center + parts.tangential, center + weight);
    guide_line(&mut figure, center + parts.normal, center + weight);
    Ok(figure)
}

/// Mass hanging from a ceiling on a rope: T up, W down
pub fn fbd_hanging(theme: &Theme) -> Result<Figure> {
    let mut figure = Figure::new(theme.clone())
        .with_title("Hanging object")
        .with_limits((-3.0, 3.0), (-4.0, 3.0))?;
    let (red, blue) = (figure.palette().red, figure.palette().blue);

    let ceiling = Ceiling::new(2.0, (-2.0, 2.0));
    let ball = Circle::new(DEFAULT_CIRCLE_RADIUS, (0.0, 0.0)).with_label("m");
    let rope = Rope::new(ball.top(), ceiling.anchor_at(0.5)).vertical();

    figure.add(&ceiling).add(&rope).add(&ball);
    figure.add(&Arrow::from_vector(ball.right(), (0.0, 2.0), red).with_label("T", (0.4, 0.0)).with_line_width(3.0));
    figure.add(&Arrow::from_vector(ball.center(), (0.0, -2.5), blue).with_label("W", (0.5, 0.0)).with_line_width(3.0));
    figure.add(&FormulaBox::new((0.0, -3.5), "T + W = 0  →  T = mg"));
    Ok(figure)
}

/// Box pushed to the right across a rough floor: F forward, friction f backward
pub fn fbd_friction(theme: &Theme) -> Result<Figure> {
    let mut figure = Figure::new(theme.clone())
        .with_title("Pushed box with friction")
        .with_limits((-4.0, 6.0), (-3.0, 4.0))?;
    let palette = figure.palette().clone();

    let ground = Ground::new(-0.75, (-4.0, 6.0));
    let block = Block::new(2.0, 1.5, Anchor::on(&ground, 0.4)).with_label("m");

    figure.add(&ground).add(&block);
    figure.add(&Arrow::from_vector(block.top(), (0.0, 1.75), palette.red).with_label("N", (0.5, 0.0)).with_line_width(3.0));
    figure.add(
        &Arrow::from_vector(block.bottom(), (0.0, -1.75), palette.blue)
            .with_label("W", (0.5, 0.0))
            .with_line_width(3.0),
    );
    figure.add(&Arrow::from_vector(block.right(), (2.0, 0.0), palette.green).with_label("F", (0.0, 0.4)).with_line_width(3.0));
    figure.add(&Arrow::from_vector(block.left(), (-1.5, 0.0), palette.orange).with_label("f", (0.0, 0.4)).with_line_width(3.0));
    note(&mut figure, (1.0, 3.3), "F: applied force    f: friction", palette.text, 14.0);
    Ok(figure)
}
