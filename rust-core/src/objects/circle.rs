// Circle: round object resting on a surface at its tangent point

use super::placed_object::PlacedObject;
use super::placement::{resolve, Anchor, ResolvedPlacement};
use crate::config::{OUTLINE_WIDTH_SCALE, Z_LABEL, Z_OBJECT};
use crate::geometries::{Point, Transform2D};
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::{Color, ShapeStyle, StrokeStyle, TextStyle};

/// Default circle fill (light blue)
pub const CIRCLE_FILL: Color = Color::rgb(0xad, 0xd8, 0xe6);

/// Circular object; `top` and `bottom` follow the surface normal, not the y axis
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f64,
    placement: ResolvedPlacement,
    label: Option<String>,
    style: Option<ShapeStyle>,
}

impl Circle {
    pub fn new<'a>(radius: f64, anchor: impl Into<Anchor<'a>>) -> Self {
        Self {
            radius,
            placement: resolve(anchor.into(), Point::new(0.0, radius), 0.0),
            label: None,
            style: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn frame(&self) -> Transform2D {
        self.placement.frame
    }

    pub fn surface_normal(&self) -> Point {
        self.placement.frame.normal()
    }

    pub fn surface_tangent(&self) -> Point {
        self.placement.frame.tangent()
    }
}

impl PlacedObject for Circle {
    fn center(&self) -> Point {
        self.placement.center
    }

    fn width(&self) -> f64 {
        2.0 * self.radius
    }

    fn height(&self) -> f64 {
        2.0 * self.radius
    }

    /// Point opposite the contact point, along the surface normal
    fn top(&self) -> Point {
        self.placement.center + self.surface_normal() * self.radius
    }

    /// Contact point with the supporting surface
    fn bottom(&self) -> Point {
        self.placement.center - self.surface_normal() * self.radius
    }
}

impl Drawable for Circle {
    fn draw(&self, figure: &mut Figure) {
        let ink = figure.palette().text;
        let outline = figure.theme().stroke_width(OUTLINE_WIDTH_SCALE);
        let style = self
            .style
            .unwrap_or_else(|| ShapeStyle::filled(CIRCLE_FILL).with_stroke(StrokeStyle::new(ink, outline)));

        figure.push_at(
            Z_OBJECT,
            DrawCommand::Circle {
                center: self.placement.center,
                radius: self.radius,
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
                    style: TextStyle::new(ink, size),
                },
            );
        }
    }
}
