// Block: rectangular object that can rest on a surface and rotate with it

use super::placed_object::PlacedObject;
use super::placement::{resolve, Anchor, ResolvedPlacement};
use crate::config::{OUTLINE_WIDTH_SCALE, Z_LABEL, Z_OBJECT};
use crate::geometries::{Point, Transform2D};
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::{Color, ShapeStyle, StrokeStyle, TextStyle};

/// Default block fill (light gray)
pub const BLOCK_FILL: Color = Color::rgb(0xd3, 0xd3, 0xd3);

/// Rectangular block
///
/// On a surface the block's base sits flush on the surface frame at `t`, and its
/// rotation is the surface angle plus the block's own angle offset. Freestanding
/// blocks are centered on their anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    width: f64,
    height: f64,
    angle_offset: f64,
    placement: ResolvedPlacement,
    corners: [Point; 4],
    label: Option<String>,
    fill: Option<Color>,
    style: Option<ShapeStyle>,
}

impl Block {
    pub fn new<'a>(width: f64, height: f64, anchor: impl Into<Anchor<'a>>) -> Self {
        let placement = resolve(anchor.into(), Point::new(0.0, height / 2.0), 0.0);
        let mut block = Self {
            width,
            height,
            angle_offset: 0.0,
            placement,
            corners: [Point::ORIGIN; 4],
            label: None,
            fill: None,
            style: None,
        };
        block.corners = block.compute_corners();
        block
    }

    /// Extra rotation in degrees on top of the surface angle
    pub fn with_angle(mut self, angle_deg: f64) -> Self {
        self.placement = self.placement.reoriented(self.angle_offset, angle_deg);
        self.angle_offset = angle_deg;
        self.corners = self.compute_corners();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Fill color; the outline keeps the theme's ink and width
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    fn compute_corners(&self) -> [Point; 4] {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        let own = Transform2D::from_degrees(self.placement.center, self.placement.rotation_deg);
        [
            own.local_to_world((-hw, -hh)),
            own.local_to_world((hw, -hh)),
            own.local_to_world((hw, hh)),
            own.local_to_world((-hw, hh)),
        ]
    }

    /// Corners in order bottom-left, bottom-right, top-right, top-left (in the block's own frame)
    pub fn corners(&self) -> [Point; 4] {
        self.corners
    }

    /// Rotation in degrees
    pub fn rotation(&self) -> f64 {
        self.placement.rotation_deg
    }

    pub fn angle_offset(&self) -> f64 {
        self.angle_offset
    }

    /// Supporting frame (the surface frame, or the synthesized one when freestanding)
    pub fn frame(&self) -> Transform2D {
        self.placement.frame
    }

    pub fn surface_normal(&self) -> Point {
        self.placement.frame.normal()
    }

    pub fn surface_tangent(&self) -> Point {
        self.placement.frame.tangent()
    }

    pub fn is_on_surface(&self) -> bool {
        self.placement.on_surface
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl PlacedObject for Block {
    fn center(&self) -> Point {
        self.placement.center
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn top(&self) -> Point {
        self.corners[2].midpoint(self.corners[3])
    }

    fn bottom(&self) -> Point {
        self.corners[0].midpoint(self.corners[1])
    }

    fn left(&self) -> Point {
        self.corners[0].midpoint(self.corners[3])
    }

    fn right(&self) -> Point {
        self.corners[1].midpoint(self.corners[2])
    }

    fn top_left(&self) -> Point {
        self.corners[3]
    }

    fn top_right(&self) -> Point {
        self.corners[2]
    }

    fn bottom_left(&self) -> Point {
        self.corners[0]
    }

    fn bottom_right(&self) -> Point {
        self.corners[1]
    }
}

impl Drawable for Block {
    fn draw(&self, figure: &mut Figure) {
        let ink = figure.palette().text;
        let outline = figure.theme().stroke_width(OUTLINE_WIDTH_SCALE);
        let style = self.style.unwrap_or_else(|| {
            ShapeStyle::filled(self.fill.unwrap_or(BLOCK_FILL)).with_stroke(StrokeStyle::new(ink, outline))
        });

        figure.push_at(
            Z_OBJECT,
            DrawCommand::Polygon {
                points: self.corners.to_vec(),
                style,
            },
        );
        if let Some(label) = &self.label {
            let size = figure.theme().font_size;
            figure.push_at(
                Z_LABEL,
                DrawCommand::Text {
                    position: self.placement.center,
                    text: label.clone(),
                    style: TextStyle::new(ink, size).rotated(self.placement.rotation_deg),
                },
            );
        }
    }
}
