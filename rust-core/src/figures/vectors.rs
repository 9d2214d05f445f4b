// Vector figures: splitting a vector into axis components, adding two perpendicular forces

use super::marks::{guide_line, note, right_angle_mark};
use crate::connectors::{decompose, AngleArc, Arrow, CoordAxes, FormulaBox};
use crate::geometries::{Point, Transform2D};
use crate::objects::Circle;
use crate::render::Figure;
use crate::style::{ShapeStyle, StrokeStyle, Theme};
use crate::Result;

/// Vector A = (4, 3) with its x and y components
pub fn vector_components(theme: &Theme) -> Result<Figure> {
    let mut figure = Figure::new(theme.clone())
        .with_title("Vector components")
        .with_limits((-0.5, 6.5), (-1.0, 5.0))?;
    let palette = figure.palette().clone();

    let a = Point::new(4.0, 3.0);
    let parts = decompose(a, &Transform2D::identity());
    let theta = Point::ORIGIN.angle_to(a).to_degrees();

    figure.add(&CoordAxes::new(Point::ORIGIN, 0.0).with_length(5.5).with_labels("x", "y"));
    figure.add(&Arrow::new(Point::ORIGIN, a, palette.blue).with_label("A", (-0.3, 0.4)).with_line_width(3.0));
    figure.add(
        &Arrow::new(Point::ORIGIN, parts.tangential, palette.red)
            .with_label("Ax = A cosθ", (0.0, -0.4))
            .with_line_width(2.5),
    );
    figure.add(
        &Arrow::new(parts.tangential, a, palette.green)
            .with_label("Ay = A sinθ", (0.9, 0.0))
            .with_line_width(2.5),
    );
    guide_line(&mut figure, (0.0, a.y), a);
    right_angle_mark(&mut figure, parts.tangential, Point::new(-1.0, 0.0), Point::new(0.0, 1.0), 0.3);
    figure.add(&AngleArc::new(Point::ORIGIN, 0.75, 0.0, theta).with_label("θ").with_color(palette.orange));
    Ok(figure)
}

/// Two perpendicular forces on a particle and their resultant
pub fn force_composition(theme: &Theme) -> Result<Figure> {
    let mut figure = Figure::new(theme.clone())
        .with_title("Adding perpendicular forces")
        .with_limits((-1.0, 7.0), (-1.0, 5.2))?;
    let palette = figure.palette().clone();

    let f1 = Point::new(4.0, 0.0);
    let f2 = Point::new(0.0, 3.0);
    let net = f1 + f2;
    let theta = Point::ORIGIN.angle_to(net).to_degrees();

    figure.add(&CoordAxes::new(Point::ORIGIN, 0.0).with_length(6.0).with_labels("x", "y"));
    figure.add(
        &Circle::new(0.3, Point::ORIGIN)
            .with_label("m")
            .with_style(ShapeStyle::filled(palette.gray.lighten(0.7)).with_stroke(StrokeStyle::new(palette.text, 2.0))),
    );
    figure.add(&Arrow::from_vector(Point::ORIGIN, f1, palette.blue).with_label("F1", (0.0, 0.4)).with_line_width(3.0));
    figure.add(&Arrow::from_vector(Point::ORIGIN, f2, palette.red).with_label("F2", (-0.5, 0.0)).with_line_width(3.0));
    figure.add(
        &Arrow::from_vector(Point::ORIGIN, net, palette.green)
            .with_label("F_net", (0.5, 0.3))
            .with_line_width(4.0),
    );
    guide_line(&mut figure, f1, net);
    guide_line(&mut figure, f2, net);
    right_angle_mark(&mut figure, Point::ORIGIN, Point::new(1.0, 0.0), Point::new(0.0, 1.0), 0.4);
    figure.add(&AngleArc::new(Point::ORIGIN, 0.75, 0.0, theta).with_label("θ"));
    figure.add(&FormulaBox::new((3.5, 4.6), "F_net = F1 + F2"));
    note(&mut figure, (3.5, 3.8), "|F_net| = √(F1² + F2²)", palette.green, 14.0);
    Ok(figure)
}
