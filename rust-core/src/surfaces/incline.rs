// Incline: a right-triangle ramp built from one of three parameter combinations
//
// Rising ('+') climbs towards the right with its wall on the right side;
// Falling ('-') descends towards the right with its wall on the left side.
// Either way t = 0 is the left end of the slope.

use std::fmt;
use std::str::FromStr;

use super::surface::Surface;
use crate::config::{
    ANGLE_LABEL_GAP, INCLINE_ANGLE_MARK_RADIUS, INCLINE_FILL_OPACITY, OUTLINE_WIDTH_SCALE, Z_ANNOTATION, Z_SURFACE,
};
use crate::geometries::{Point, Transform2D};
use crate::objects::PlacedObject;
use crate::render::{DrawCommand, Drawable, Figure};
use crate::style::{Color, ShapeStyle, StrokeStyle, TextStyle};
use crate::{DiagramError, Result};

/// Which way the slope climbs, read left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeDirection {
    /// `'+'`: low on the left, high on the right
    Rising,
    /// `'-'`: high on the left, low on the right
    Falling,
}

impl FromStr for SlopeDirection {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "+" | "rising" => Ok(SlopeDirection::Rising),
            "-" | "falling" => Ok(SlopeDirection::Falling),
            other => Err(DiagramError::InvalidSlopeDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SlopeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlopeDirection::Rising => f.write_str("+"),
            SlopeDirection::Falling => f.write_str("-"),
        }
    }
}

/// The one parameter pair that fixes the ramp's shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InclineShape {
    WidthHeight { width: f64, height: f64 },
    WidthAngle { width: f64, angle_deg: f64 },
    HeightAngle { height: f64, angle_deg: f64 },
}

impl InclineShape {
    /// Pick the shape from optional inputs; exactly one pair must be present
    pub fn from_options(width: Option<f64>, height: Option<f64>, angle_deg: Option<f64>) -> Result<Self> {
        match (width, height, angle_deg) {
            (Some(width), Some(height), None) => Ok(InclineShape::WidthHeight { width, height }),
            (Some(width), None, Some(angle_deg)) => Ok(InclineShape::WidthAngle { width, angle_deg }),
            (None, Some(height), Some(angle_deg)) => Ok(InclineShape::HeightAngle { height, angle_deg }),
            _ => Err(DiagramError::InvalidInclineParameters(format!(
                "need exactly one of width+height, width+angle or height+angle (got width={:?}, height={:?}, angle={:?})",
                width, height, angle_deg
            ))),
        }
    }

    /// Resolve to `(width, height, angle_rad)`
    pub fn resolve(&self) -> Result<(f64, f64, f64)> {
        match *self {
            InclineShape::WidthHeight { width, height } => {
                check_length("width", width)?;
                check_length("height", height)?;
                Ok((width, height, height.atan2(width)))
            }
            InclineShape::WidthAngle { width, angle_deg } => {
                check_length("width", width)?;
                let angle = check_angle(angle_deg)?;
                Ok((width, width * angle.tan(), angle))
            }
            InclineShape::HeightAngle { height, angle_deg } => {
                check_length("height", height)?;
                let angle = check_angle(angle_deg)?;
                Ok((height / angle.tan(), height, angle))
            }
        }
    }
}

fn check_length(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DiagramError::InvalidInclineParameters(format!(
            "{} must be finite and positive, got {}",
            name, value
        )))
    }
}

fn check_angle(angle_deg: f64) -> Result<f64> {
    if angle_deg.is_finite() && angle_deg > 0.0 && angle_deg < 90.0 {
        Ok(angle_deg.to_radians())
    } else {
        Err(DiagramError::InvalidInclineParameters(format!(
            "angle must lie strictly between 0 and 90 degrees, got {}",
            angle_deg
        )))
    }
}

/// Angle arc drawn in the bottom corner where the slope meets the base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMark {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl AngleMark {
    /// Where the θ label goes: just outside the arc, on its bisector
    pub fn label_position(&self) -> Point {
        let mid = ((self.start_deg + self.end_deg) / 2.0).to_radians();
        self.center + Point::from_angle(mid) * (self.radius + ANGLE_LABEL_GAP)
    }
}

/// Ramp with its bottom-left bounding corner at `origin`
#[derive(Debug, Clone, PartialEq)]
pub struct Incline {
    origin: Point,
    direction: SlopeDirection,
    width: f64,
    height: f64,
    angle: f64,
    slope_start: Point,
    slope_end: Point,
    show_angle: bool,
    angle_label: String,
    label_offset: Point,
    fill: Option<Color>,
}

impl Incline {
    pub fn new(origin: impl Into<Point>, direction: SlopeDirection, shape: InclineShape) -> Result<Self> {
        let origin = origin.into();
        let (width, height, angle) = shape.resolve()?;
        let (ox, oy) = (origin.x, origin.y);

        let (slope_start, slope_end) = match direction {
            SlopeDirection::Rising => (Point::new(ox + width, oy + height), Point::new(ox, oy)),
            SlopeDirection::Falling => (Point::new(ox, oy + height), Point::new(ox + width, oy)),
        };

        Ok(Self {
            origin,
            direction,
            width,
            height,
            angle,
            slope_start,
            slope_end,
            show_angle: true,
            angle_label: "θ".to_string(),
            label_offset: Point::ORIGIN,
            fill: None,
        })
    }

    /// Hide or show the angle arc and its label
    pub fn with_angle_mark(mut self, show: bool) -> Self {
        self.show_angle = show;
        self
    }

    pub fn with_angle_label(mut self, label: impl Into<String>, offset: impl Into<Point>) -> Self {
        self.angle_label = label.into();
        self.label_offset = offset.into();
        self
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn direction(&self) -> SlopeDirection {
        self.direction
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// High end of the slope
    pub fn slope_start(&self) -> Point {
        self.slope_start
    }

    /// Low end of the slope
    pub fn slope_end(&self) -> Point {
        self.slope_end
    }

    pub fn slope_length(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// Point at fraction `t` along the slope, measured from the left end
    pub fn point_on_surface(&self, t: f64) -> Point {
        let s = match self.direction {
            SlopeDirection::Rising => 1.0 - t,
            SlopeDirection::Falling => t,
        };
        self.slope_start + (self.slope_end - self.slope_start) * s
    }

    /// Signed slope angle of the surface frame: positive when rising
    pub fn surface_angle(&self) -> f64 {
        match self.direction {
            SlopeDirection::Rising => self.angle,
            SlopeDirection::Falling => -self.angle,
        }
    }

    /// Triangle outline: the two slope ends plus the right-angle corner
    pub fn vertices(&self) -> [Point; 3] {
        let (ox, oy) = (self.origin.x, self.origin.y);
        match self.direction {
            SlopeDirection::Rising => [self.slope_start, self.slope_end, Point::new(ox + self.width, oy)],
            SlopeDirection::Falling => [self.slope_start, self.slope_end, Point::new(ox, oy)],
        }
    }

    pub fn angle_mark(&self) -> AngleMark {
        let deg = self.angle_deg();
        match self.direction {
            SlopeDirection::Rising => AngleMark {
                center: self.origin,
                radius: INCLINE_ANGLE_MARK_RADIUS,
                start_deg: 0.0,
                end_deg: deg,
            },
            SlopeDirection::Falling => AngleMark {
                center: self.origin + (self.width, 0.0),
                radius: INCLINE_ANGLE_MARK_RADIUS,
                start_deg: 180.0 - deg,
                end_deg: 180.0,
            },
        }
    }
}

impl Surface for Incline {
    fn surface_transform(&self, t: f64) -> Transform2D {
        Transform2D::new(self.point_on_surface(t), self.surface_angle())
    }

    fn point_on_surface(&self, t: f64) -> Point {
        Incline::point_on_surface(self, t)
    }
}

impl PlacedObject for Incline {
    fn center(&self) -> Point {
        self.origin + (self.width / 2.0, self.height / 2.0)
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

impl Drawable for Incline {
    fn draw(&self, figure: &mut Figure) {
        let fill = self.fill.unwrap_or(figure.palette().ground);
        let ink = figure.palette().text;
        let outline = StrokeStyle::new(ink, figure.theme().stroke_width(OUTLINE_WIDTH_SCALE));
        let (ox, oy) = (self.origin.x, self.origin.y);

        figure.push_at(
            Z_SURFACE,
            DrawCommand::Polygon {
                points: self.vertices().to_vec(),
                style: ShapeStyle::filled(fill).with_fill_opacity(INCLINE_FILL_OPACITY),
            },
        );

        let wall_x = match self.direction {
            SlopeDirection::Rising => ox + self.width,
            SlopeDirection::Falling => ox,
        };
        let edges = [
            (Point::new(ox, oy), Point::new(ox + self.width, oy)),
            (Point::new(wall_x, oy), Point::new(wall_x, oy + self.height)),
            (self.slope_start, self.slope_end),
        ];
        for (a, b) in edges {
            figure.push_at(
                Z_SURFACE,
                DrawCommand::Polyline {
                    points: vec![a, b],
                    stroke: outline,
                },
            );
        }

        if self.show_angle {
            let mark = self.angle_mark();
            figure.push_at(
                Z_ANNOTATION,
                DrawCommand::Arc {
                    center: mark.center,
                    radius: mark.radius,
                    start_deg: mark.start_deg,
                    end_deg: mark.end_deg,
                    stroke: outline,
                },
            );
            let size = figure.theme().font_size;
            figure.push(DrawCommand::Text {
                position: mark.label_position() + self.label_offset,
                text: self.angle_label.clone(),
                style: TextStyle::new(ink, size),
            });
        }
    }
}
