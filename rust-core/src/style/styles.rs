// Per-object style values: stroke, fill and text settings carried by drawables and draw commands

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Outline / line settings (width in pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub opacity: f64,
    pub dashed: bool,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            opacity: 1.0,
            dashed: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// Fill plus optional outline for closed shapes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub fill_opacity: f64,
    pub stroke: Option<StrokeStyle>,
}

impl ShapeStyle {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            fill_opacity: 1.0,
            stroke: None,
        }
    }

    pub fn outline(stroke: StrokeStyle) -> Self {
        Self {
            fill: None,
            fill_opacity: 1.0,
            stroke: Some(stroke),
        }
    }

    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// Horizontal text alignment relative to the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// Label settings (size in pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    pub size: f64,
    pub bold: bool,
    pub anchor: TextAnchor,
    /// Counterclockwise rotation about the anchor, in degrees
    #[serde(default)]
    pub rotation_deg: f64,
}

impl TextStyle {
    pub fn new(color: Color, size: f64) -> Self {
        Self {
            color,
            size,
            bold: false,
            anchor: TextAnchor::Middle,
            rotation_deg: 0.0,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn rotated(mut self, angle_deg: f64) -> Self {
        self.rotation_deg = angle_deg;
        self
    }
}
