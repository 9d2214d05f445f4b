// Annotation helpers: angle arcs, rotated coordinate axes and formula boxes

use crate::config::{
    ANGLE_LABEL_GAP, ARROW_HEAD_LENGTH_PX, OUTLINE_WIDTH_SCALE, THIN_WIDTH_SCALE, Z_ANNOTATION, Z_LABEL,
};
use crate::geometries::{Point, Transform2D};
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::{Color, ShapeStyle, StrokeStyle, TextAnchor, TextStyle};

/// Dashed arc marking an angle, counterclockwise from `start_deg` to `end_deg`
#[derive(Debug, Clone, PartialEq)]
pub struct AngleArc {
    center: Point,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    label: Option<String>,
    color: Option<Color>,
}

impl AngleArc {
    pub fn new(center: impl Into<Point>, radius: f64, start_deg: f64, end_deg: f64) -> Self {
        Self {
            center: center.into(),
            radius,
            start_deg,
            end_deg,
            label: None,
            color: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Label spot on the bisector, just outside the arc
    pub fn label_position(&self) -> Point {
        let mid = ((self.start_deg + self.end_deg) / 2.0).to_radians();
        self.center + Point::from_angle(mid) * (self.radius + ANGLE_LABEL_GAP)
    }
}

impl Drawable for AngleArc {
    fn draw(&self, figure: &mut Figure) {
        let color = self.color.unwrap_or(figure.palette().orange);
        let width = figure.theme().stroke_width(OUTLINE_WIDTH_SCALE);
        figure.push_at(
            Z_ANNOTATION,
            DrawCommand::Arc {
                center: self.center,
                radius: self.radius,
                start_deg: self.start_deg,
                end_deg: self.end_deg,
                stroke: StrokeStyle::new(color, width).dashed(),
            },
        );
        if let Some(label) = &self.label {
            figure.push_at(
                Z_LABEL,
                DrawCommand::Text {
                    position: self.label_position(),
                    text: label.clone(),
                    style: TextStyle::new(color, 14.0),
                },
            );
        }
    }
}

/// Pair of axis arrows rotated counterclockwise by `angle_deg`
#[derive(Debug, Clone, PartialEq)]
pub struct CoordAxes {
    origin: Point,
    angle_deg: f64,
    length: f64,
    labels: (String, String),
    color: Option<Color>,
}

impl CoordAxes {
    pub fn new(origin: impl Into<Point>, angle_deg: f64) -> Self {
        Self {
            origin: origin.into(),
            angle_deg,
            length: 1.5,
            labels: ("x'".to_string(), "y'".to_string()),
            color: None,
        }
    }

    /// Axes aligned with a surface frame: x' along the tangent, y' along the normal
    pub fn from_frame(frame: &Transform2D) -> Self {
        Self::new(frame.origin(), frame.angle_deg())
    }

    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.labels = (x.into(), y.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn x_end(&self) -> Point {
        self.origin + Point::from_angle(self.angle_deg.to_radians()) * self.length
    }

    pub fn y_end(&self) -> Point {
        self.origin + Point::from_angle((self.angle_deg + 90.0).to_radians()) * self.length
    }
}

impl Drawable for CoordAxes {
    fn draw(&self, figure: &mut Figure) {
        let color = self.color.unwrap_or(figure.palette().gray);
        let stroke = StrokeStyle::new(color, figure.theme().stroke_width(OUTLINE_WIDTH_SCALE));
        let text = TextStyle::new(color, 11.0).anchored(TextAnchor::Start);

        for (end, label, nudge) in [
            (self.x_end(), &self.labels.0, (0.2, 0.0)),
            (self.y_end(), &self.labels.1, (0.0, 0.2)),
        ] {
            figure.push_at(
                Z_ANNOTATION,
                DrawCommand::Arrow {
                    start: self.origin,
                    end,
                    stroke,
                    head_length: ARROW_HEAD_LENGTH_PX * 0.75,
                },
            );
            figure.push_at(
                Z_LABEL,
                DrawCommand::Text {
                    position: end + nudge,
                    text: label.clone(),
                    style: text,
                },
            );
        }
    }
}

/// Text in a translucent panel, centered on `position`
///
/// Multi-line text is split on `\n`. The panel size is estimated from the
/// character count since no font metrics are available before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaBox {
    position: Point,
    text: String,
    font_size: f64,
    opacity: f64,
}

impl FormulaBox {
    pub fn new(position: impl Into<Point>, text: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            text: text.into(),
            font_size: 13.0,
            opacity: 0.8,
        }
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Panel half extents in world units for a given scale
    pub fn half_extents(&self, px_per_unit: f64) -> (f64, f64) {
        let lines = self.text.lines().count().max(1) as f64;
        let columns = self.text.lines().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
        let pad = 0.4 * self.font_size;
        let width = columns * 0.6 * self.font_size + 2.0 * pad;
        let height = lines * 1.25 * self.font_size + 2.0 * pad;
        (width / (2.0 * px_per_unit), height / (2.0 * px_per_unit))
    }
}

impl Drawable for FormulaBox {
    fn draw(&self, figure: &mut Figure) {
        let (hw, hh) = self.half_extents(figure.theme().px_per_unit);
        let border = figure.theme().stroke_width(THIN_WIDTH_SCALE);
        let palette = figure.palette();
        let style = ShapeStyle::filled(palette.panel)
            .with_fill_opacity(self.opacity)
            .with_stroke(StrokeStyle::new(palette.panel_border, border));
        let ink = palette.text;
        let c = self.position;

        figure.push_at(
            Z_ANNOTATION,
            DrawCommand::Polygon {
                points: vec![c - (hw, hh), c + (hw, -hh), c + (hw, hh), c + (-hw, hh)],
                style,
            },
        );
        figure.push_at(
            Z_LABEL,
            DrawCommand::Text {
                position: c,
                text: self.text.clone(),
                style: TextStyle::new(ink, self.font_size),
            },
        );
    }
}
