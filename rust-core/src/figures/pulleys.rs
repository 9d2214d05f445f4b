// Pulley systems: tables with edge pulleys, and inclines with a wheel at the top

use log::debug;

use super::marks::caption;
use crate::connectors::{Arrow, Rope};
use crate::geometries::Point;
use crate::objects::{Anchor, Block, MassPoint, PlacedObject, Pulley};
use crate::render::Figure;
use crate::style::Theme;
use crate::surfaces::{Incline, InclineShape, SlopeDirection, Table};
use crate::Result;

/// Rope from a block's side over `pulley`, leaving the rim along the block's surface
fn rope_to_rim(block_side: Point, pulley: &Pulley) -> Rope {
    Rope::new(block_side, pulley.rim_point(block_side - pulley.center()))
}

/// Block on a table tied over two edge pulleys to two hanging weights
pub fn table_pulleys(theme: &Theme) -> Result<Figure> {
    let mut figure = Figure::new(theme.clone())
        .with_title("Two pulleys at the table edges")
        .with_limits((-2.0, 10.0), (-2.0, 5.0))?;
    let palette = figure.palette().clone();

    let table = Table::new(1.0, 2.0, 6.0, 1.0);
    let block = Block::new(1.2, 0.8, Anchor::on(&table, 0.5))
        .with_label("m")
        .with_fill(palette.blue.lighten(0.6));
    let left = Pulley::at_surface(&table, 0.0, Some(&block));
    let right = Pulley::at_surface(&table, 1.0, Some(&block));
    let (left_hang, right_hang) = (left.hang_point(block.center()), right.hang_point(block.center()));
    let left_weight = Block::new(0.6, 0.8, (left_hang.x, 2.0))
        .with_label("M1")
        .with_fill(palette.orange.lighten(0.3));
    let right_weight = Block::new(0.6, 0.8, (right_hang.x, 1.0))
        .with_label("M2")
        .with_fill(palette.green.lighten(0.3));

    figure.add(&table).add(&block);
    figure.add(&rope_to_rim(block.left(), &left));
    figure.add(&Rope::new(left_hang, left_weight.top()).vertical());
    figure.add(&rope_to_rim(block.right(), &right));
    figure.add(&Rope::new(right_hang, right_weight.top()).vertical());
    figure.add(&left).add(&right).add(&left_weight).add(&right_weight);
    Ok(figure)
}

/// Two bodies joined over one pulley at the table edge, with a free-body panel for each
pub fn fbd_pulley(theme: &Theme) -> Result<Figure> {
    let mut figure = Figure::new(theme.clone())
        .with_title("Two bodies joined by a pulley")
        .with_limits((-2.0, 10.0), (-5.0, 3.0))?;
    let palette = figure.palette().clone();

    let table = Table::new(0.0, -4.5, 3.5, 4.5);
    let m1 = Block::new(1.5, 1.0, Anchor::on(&table, 0.5))
        .with_label("m1")
        .with_fill(palette.blue.lighten(0.6));
    let pulley = Pulley::at_surface(&table, 1.0, Some(&m1));
    let hang = pulley.hang_point(m1.center());
    let m2 = Block::new(0.8, 1.5, (hang.x, -2.75))
        .with_label("m2")
        .with_fill(palette.red.lighten(0.5));

    figure.add(&table).add(&m1);
    figure.add(&rope_to_rim(m1.right(), &pulley));
    figure.add(&Rope::new(hang, m2.top()).vertical());
    figure.add(&pulley).add(&m2);

    // free-body panels: tension is the same on both ends of the rope
    let body1 = Point::new(7.5, 0.0);
    caption(&mut figure, (7.0, 1.5), "FBD of m1", palette.text, 12.0);
    figure.add(&MassPoint::at(body1).with_size(6.0));
    figure.add(&Arrow::from_vector(body1, (1.5, 0.0), palette.red).with_label("T", (0.0, 0.3)));
    figure.add(&Arrow::from_vector(body1, (0.0, 1.0), palette.green).with_label("N", (0.4, 0.0)));
    figure.add(&Arrow::from_vector(body1, (0.0, -1.0), palette.blue).with_label("W1", (0.5, 0.0)));

    let body2 = Point::new(7.5, -3.5);
    caption(&mut figure, (7.0, -2.0), "FBD of m2", palette.text, 12.0);
    figure.add(&MassPoint::at(body2).with_size(6.0));
    figure.add(&Arrow::from_vector(body2, (0.0, 1.0), palette.red).with_label("T", (0.4, 0.0)));
    figure.add(&Arrow::from_vector(body2, (0.0, -1.0), palette.blue).with_label("W2", (0.5, 0.0)));
    Ok(figure)
}

/// Block on an incline tied over a pulley at the high end to a hanging weight
pub fn incline_pulley(theme: &Theme, direction: SlopeDirection) -> Result<Figure> {
    let mut figure = Figure::new(theme.clone())
        .with_title(match direction {
            SlopeDirection::Falling => "Incline with a pulley (falling slope)",
            SlopeDirection::Rising => "Incline with a pulley (rising slope)",
        })
        .with_limits((-1.5, 9.0), (-1.0, 5.0))?;
    let palette = figure.palette().clone();

    let incline = Incline::new(
        (0.0, 0.0),
        direction,
        InclineShape::WidthHeight { width: 6.0, height: 3.0 },
    )?
    .with_fill(palette.ground);

    // The high end is t = 0 on a falling slope and t = 1 on a rising one
    let (block_t, pulley_t, weight_width) = match direction {
        SlopeDirection::Falling => (0.4, 0.0, 0.4),
        SlopeDirection::Rising => (0.6, 1.0, 0.8),
    };
    let block = Block::new(1.0, 0.6, Anchor::on(&incline, block_t))
        .with_label("m")
        .with_fill(palette.blue.lighten(0.6));
    let pulley = Pulley::at_surface(&incline, pulley_t, Some(&block));
    let hang = pulley.hang_point(block.center());
    let weight = Block::new(weight_width, 1.0, (hang.x, 0.5))
        .with_label("M")
        .with_fill(palette.orange.lighten(0.3));
    debug!(
        "Incline pulley figure: slope {:.1}°, pulley at {}",
        incline.angle_deg(),
        pulley.center()
    );

    let block_side = match direction {
        SlopeDirection::Falling => block.left(),
        SlopeDirection::Rising => block.right(),
    };

    figure.add(&incline).add(&block);
    figure.add(&rope_to_rim(block_side, &pulley));
    figure.add(&Rope::new(hang, weight.top()).vertical());
    figure.add(&pulley).add(&weight);
    Ok(figure)
}

pub fn incline_pulley_falling(theme: &Theme) -> Result<Figure> {
    incline_pulley(theme, SlopeDirection::Falling)
}

pub fn incline_pulley_rising(theme: &Theme) -> Result<Figure> {
    incline_pulley(theme, SlopeDirection::Rising)
}
