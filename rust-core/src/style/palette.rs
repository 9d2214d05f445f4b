// Palette module: named diagram colors with two presets
// Replaces module-level color tables; a palette travels inside the Theme handed to each Figure.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Named colors used by the drawing code
///
/// Physics roles map onto these names by convention: weights are red, normal
/// forces blue, friction orange, tensions purple, applied forces green.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub blue: Color,
    pub red: Color,
    pub green: Color,
    pub orange: Color,
    pub purple: Color,
    pub gray: Color,
    pub brown: Color,
    pub rope: Color,
    pub rope_texture: Color,
    pub ground: Color,
    pub text: Color,
    pub highlight: Color,
    pub panel: Color,
    pub panel_border: Color,
}

impl Palette {
    /// Palette of the free-body and incline diagrams
    pub fn classic() -> Self {
        Self {
            blue: Color::rgb(0x25, 0x63, 0xeb),
            red: Color::rgb(0xdc, 0x26, 0x26),
            green: Color::rgb(0x16, 0xa3, 0x4a),
            orange: Color::rgb(0xea, 0x58, 0x0c),
            purple: Color::rgb(0x7c, 0x3a, 0xed),
            gray: Color::rgb(0x6b, 0x72, 0x80),
            brown: Color::rgb(0x92, 0x40, 0x0e),
            rope: Color::rgb(0x8b, 0x45, 0x13),
            rope_texture: Color::rgb(0x5d, 0x3a, 0x1a),
            ground: Color::rgb(0xd4, 0xa5, 0x74),
            text: Color::BLACK,
            highlight: Color::rgb(0xca, 0x8a, 0x04),
            panel: Color::rgb(0xff, 0xff, 0xe0),
            panel_border: Color::rgb(0x6b, 0x72, 0x80),
        }
    }

    /// Lighter STEM palette of the torque diagrams
    ///
    /// Force green, torque purple, pivot orange and r-vector blue.
    pub fn stem_light() -> Self {
        Self {
            blue: Color::rgb(0x25, 0x63, 0xeb),
            red: Color::rgb(0xdc, 0x26, 0x26),
            green: Color::rgb(0x16, 0xa3, 0x4a),
            orange: Color::rgb(0xea, 0x58, 0x0c),
            purple: Color::rgb(0x93, 0x33, 0xea),
            gray: Color::rgb(0x9c, 0xa3, 0xaf),
            brown: Color::rgb(0x92, 0x40, 0x0e),
            rope: Color::rgb(0x8b, 0x45, 0x13),
            rope_texture: Color::rgb(0x5d, 0x3a, 0x1a),
            ground: Color::rgb(0xd4, 0xa5, 0x74),
            text: Color::rgb(0x1f, 0x29, 0x37),
            highlight: Color::rgb(0xca, 0x8a, 0x04),
            panel: Color::rgb(0xf3, 0xf4, 0xf6),
            panel_border: Color::rgb(0xd1, 0xd5, 0xdb),
        }
    }

    /// Look a color up by its field name
    pub fn get(&self, name: &str) -> Option<Color> {
        let color = match name {
            "blue" => self.blue,
            "red" => self.red,
            "green" => self.green,
            "orange" => self.orange,
            "purple" => self.purple,
            "gray" | "grey" => self.gray,
            "brown" => self.brown,
            "rope" => self.rope,
            "rope_texture" => self.rope_texture,
            "ground" => self.ground,
            "text" => self.text,
            "highlight" => self.highlight,
            "panel" => self.panel,
            "panel_border" => self.panel_border,
            _ => return None,
        };
        Some(color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
