// Style module: colors, palettes, themes and per-object style values
// Styling is explicit configuration handed to a Figure, never module-level state

// ======================== MODULE DECLARATIONS ========================
pub mod color;
pub mod palette;
pub mod styles;
pub mod theme;

// Test modules
mod _tests_color;
mod _tests_theme;

// ======================== COLORS ========================
pub use color::Color; // struct - validated sRGB color, serialized as "#rrggbb"
// Color impl methods:
//   rgb(r, g, b) -> Self                         - const constructor
//   hex(value: &str) -> Result<Self>             - parses "#rrggbb" / "#rgb", InvalidColor otherwise
//   to_hex(&self) -> String                      - lowercase "#rrggbb"
//   mix(&self, other, amount) -> Color           - linear blend
//   lighten(&self, amount) -> Color              - blend towards white

// ======================== PALETTES & THEMES ========================
pub use palette::Palette; // struct - named colors (classic / stem_light presets)
pub use theme::{
    Theme,       // struct - palette, background, font, px_per_unit, default_line_width
    ThemePreset, // enum - Classic, StemLight (FromStr: "classic", "stem-light")
};
// Theme impl methods:
//   preset(preset: ThemePreset) -> Self          - built-in theme
//   from_toml_str(text: &str) -> Result<Self>    - partial TOML, defaults for missing keys
//   load(path) -> Result<Self>                   - reads a TOML theme file
//   stroke_width(&self, scale) -> f64            - default_line_width * scale

// ======================== STYLE VALUES ========================
pub use styles::{
    ShapeStyle,  // struct - fill color/opacity plus optional outline
    StrokeStyle, // struct - line color, width (px), opacity, dashed
    TextAnchor,  // enum - Start, Middle, End
    TextStyle,   // struct - label color, size (px), weight, anchor, rotation
};
