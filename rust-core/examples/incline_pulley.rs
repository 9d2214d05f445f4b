/// Build an incline-and-pulley diagram by hand with the placement API
///
/// Places a block on a 30° slope, hangs a weight from a pulley at the high end,
/// splits the block's weight along the slope and writes the result as SVG.
use physics_diagram::prelude::*;

fn main() -> Result<()> {
    let theme = Theme::default();
    let mut figure = Figure::new(theme).with_title("Block on an incline with a pulley");
    let palette = figure.palette().clone();

    let incline = Incline::new(
        (0.0, 0.0),
        SlopeDirection::Falling,
        InclineShape::WidthAngle { width: 6.0, angle_deg: 30.0 },
    )?;
    println!("Incline: {:.2} high, slope length {:.2}", incline.height(), incline.slope_length());

    let block = Block::new(1.2, 0.7, Anchor::on(&incline, 0.45)).with_label("m");
    let pulley = Pulley::at_surface(&incline, 0.0, Some(&block));
    let hang = pulley.hang_point(block.center());
    let weight = Block::new(0.5, 0.9, (hang.x, 0.6)).with_label("M");
    println!("Block center {} rotated {:.1}°", block.center(), block.rotation());
    println!("Pulley center {} radius {:.2}", pulley.center(), pulley.radius());

    // leave the rim along the slope, hang from the far side of the wheel
    let rope = Rope::new(block.left(), pulley.rim_point(block.left() - pulley.center()));
    let hanger = Rope::new(hang, weight.top()).vertical();
    println!("Ropes: {:?} ({:.2}), {:?} ({:.2})", rope.kind(), rope.length(), hanger.kind(), hanger.length());

    let gravity = Point::new(0.0, -2.0);
    let parts = decompose(gravity, &block.frame());
    println!("Weight along slope {}, into slope {}", parts.tangential, parts.normal);

    figure.add(&incline).add(&block).add(&rope).add(&hanger).add(&pulley).add(&weight);
    figure.add(&Arrow::from_vector(block.center(), gravity, palette.red).with_label("W", (0.25, 0.0)));
    figure.add(&Arrow::from_vector(block.center(), parts.tangential, palette.blue));
    figure.add(&Arrow::from_vector(block.center(), parts.normal, palette.blue));
    figure.fit_to_content(0.5);

    let path = std::env::temp_dir().join("incline_pulley.svg");
    figure.write_svg(&path)?;
    println!("Wrote {} draw commands to {}", figure.len(), path.display());
    Ok(())
}
