// Color module: validated `#rrggbb` colors shared by the palette, styles and the SVG backend

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{DiagramError, Result};

/// An opaque sRGB color, always serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `#rgb`) hex string
    ///
    /// The leading `#` is required; hex digits are case-insensitive.
    pub fn hex(value: &str) -> Result<Self> {
        let invalid = || DiagramError::InvalidColor(value.to_string());
        let digits = value.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Color::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Color::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend towards `other`; `amount` is clamped to [0, 1]
    pub fn mix(&self, other: Color, amount: f64) -> Color {
        let t = amount.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::rgb(lerp(self.r, other.r), lerp(self.g, other.g), lerp(self.b, other.b))
    }

    /// Lighter tint used for translucent fills and highlight bands
    pub fn lighten(&self, amount: f64) -> Color {
        self.mix(Color::WHITE, amount)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self> {
        Color::hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = DiagramError;

    fn try_from(value: String) -> Result<Self> {
        Color::hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
