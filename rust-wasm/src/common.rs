use serde::{Deserialize, Serialize};
use std::str::FromStr;
use wasm_bindgen::prelude::*;

use physics_diagram::style::{Theme, ThemePreset};
use physics_diagram::DiagramError;

/// Gallery entry for JavaScript interop
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FigureInfo {
    pub name: String,
    pub description: String,
}

/// Visible region of a figure in world units and SVG pixels
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FigureBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width_px: f64,
    pub height_px: f64,
}

/// Theme from a preset name; `None` or an empty string means the classic look
pub fn theme_for(preset: Option<String>) -> Result<Theme, DiagramError> {
    match preset.as_deref().map(str::trim) {
        None | Some("") => Ok(Theme::default()),
        Some(name) => Ok(Theme::preset(ThemePreset::from_str(name)?)),
    }
}

pub fn to_js_error(err: DiagramError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
