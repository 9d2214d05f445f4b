// Theme module: per-figure styling configuration, loadable from TOML
// A Theme is passed into every Figure; nothing reads colors from global state.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::color::Color;
use super::palette::Palette;
use crate::{DiagramError, Result};

/// Built-in theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreset {
    Classic,
    StemLight,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 2] = [ThemePreset::Classic, ThemePreset::StemLight];

    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Classic => "classic",
            ThemePreset::StemLight => "stem-light",
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemePreset {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(ThemePreset::Classic),
            "stem-light" | "stem_light" => Ok(ThemePreset::StemLight),
            other => Err(DiagramError::UnknownPreset(other.to_string())),
        }
    }
}

/// Figure-wide styling
///
/// Every field has a default, so a TOML file only needs to name what it changes:
///
/// ```toml
/// px_per_unit = 80.0
///
/// [palette]
/// red = "#b91c1c"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub palette: Palette,
    pub background: Color,
    pub font_family: String,
    /// Base label size in pixels
    pub font_size: f64,
    /// SVG pixels per world unit
    pub px_per_unit: f64,
    /// Arrow shaft width in pixels; outlines and surface edges scale from it
    pub default_line_width: f64,
}

impl Theme {
    pub fn preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Classic => Self {
                palette: Palette::classic(),
                background: Color::WHITE,
                font_family: "sans-serif".to_string(),
                font_size: 14.0,
                px_per_unit: 60.0,
                default_line_width: 2.0,
            },
            ThemePreset::StemLight => Self {
                palette: Palette::stem_light(),
                background: Color::rgb(0xfa, 0xfa, 0xfa),
                font_family: "Helvetica, Arial, sans-serif".to_string(),
                font_size: 14.0,
                px_per_unit: 60.0,
                default_line_width: 2.5,
            },
        }
    }

    /// Parse a theme from TOML text; missing keys keep the classic defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let theme: Theme = toml::from_str(text)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Load a theme file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading theme from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Pixel width of a stroke drawn at `scale` times the base line width
    pub fn stroke_width(&self, scale: f64) -> f64 {
        self.default_line_width * scale
    }

    fn validate(&self) -> Result<()> {
        if !(self.px_per_unit.is_finite() && self.px_per_unit > 0.0) {
            return Err(DiagramError::InvalidParameter(format!(
                "px_per_unit must be positive, got {}",
                self.px_per_unit
            )));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(DiagramError::InvalidParameter(format!(
                "font_size must be positive, got {}",
                self.font_size
            )));
        }
        if !(self.default_line_width.is_finite() && self.default_line_width >= 0.0) {
            return Err(DiagramError::InvalidParameter(format!(
                "default_line_width must be non-negative, got {}",
                self.default_line_width
            )));
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::preset(ThemePreset::Classic)
    }
}
