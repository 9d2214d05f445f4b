//! WebAssembly bindings for the physics diagram gallery
//!
//! The page asks for a figure by name and gets back either a finished SVG
//! string or the display list, which it can draw itself.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use physics_diagram::figures;
use physics_diagram::kinematics::{MotionPreset, Timeline};
use physics_diagram::render::Figure;

mod common;

#[cfg(test)]
mod tests;

pub use common::{FigureBounds, FigureInfo};
use common::{theme_for, to_js_error};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = debug)]
    fn console_debug(s: &str);
}

// Enable panic messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

/// Library version, shown in the page footer
#[wasm_bindgen(js_name = version)]
pub fn version() -> String {
    physics_diagram::VERSION.to_string()
}

pub fn figure_infos() -> Vec<FigureInfo> {
    figures::catalog()
        .iter()
        .map(|entry| FigureInfo {
            name: entry.name.to_string(),
            description: entry.description.to_string(),
        })
        .collect()
}

/// Names and descriptions of every gallery figure
#[wasm_bindgen(js_name = listFigures)]
pub fn list_figures() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&figure_infos())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize figure list: {}", e)))
}

/// Render a gallery figure straight to an SVG string
#[wasm_bindgen(js_name = renderFigureSvg)]
pub fn render_figure_svg(name: &str, preset: Option<String>) -> Result<String, JsValue> {
    WasmFigure::new(name, preset)?.svg()
}

/// Display list of a gallery figure as a plain JS object
#[wasm_bindgen(js_name = displayList)]
pub fn display_list(name: &str, preset: Option<String>) -> Result<JsValue, JsValue> {
    WasmFigure::new(name, preset)?.display_list()
}

/// Sampled quantities of a named motion, `[{ t, x, v, ... }, ...]`
///
/// `t_end` falls back to the motion's own span.
#[wasm_bindgen(js_name = sampleMotion)]
pub fn sample_motion(kind: &str, t_end: Option<f64>, fps: f64) -> Result<JsValue, JsValue> {
    let preset: MotionPreset = kind.parse().map_err(to_js_error)?;
    let timeline = Timeline::new(t_end.unwrap_or_else(|| preset.default_duration()), fps)
        .map_err(to_js_error)?;
    let samples = preset.sample(&timeline).map_err(to_js_error)?;
    console_debug(&format!("sampled '{}' at {} instants", preset, samples.len()));

    // plain objects rather than JS Maps for the flattened value columns
    samples
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize samples: {}", e)))
}

/// WASM wrapper for a built gallery figure
#[wasm_bindgen]
pub struct WasmFigure {
    name: String,
    inner: Figure,
}

#[wasm_bindgen]
impl WasmFigure {
    /// Build the figure `name` with an optional theme preset ("classic", "stem-light")
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str, preset: Option<String>) -> Result<WasmFigure, JsValue> {
        let theme = theme_for(preset).map_err(to_js_error)?;
        let inner = figures::build(name, &theme).map_err(to_js_error)?;
        Ok(WasmFigure {
            name: name.to_string(),
            inner,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> Option<String> {
        self.inner.title().map(str::to_string)
    }

    /// Number of recorded draw commands
    #[wasm_bindgen(js_name = commandCount)]
    pub fn command_count(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen]
    pub fn svg(&self) -> Result<String, JsValue> {
        self.inner.to_svg().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = displayList)]
    pub fn display_list(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.to_display_list())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize display list: {}", e)))
    }

    #[wasm_bindgen]
    pub fn bounds(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.figure_bounds())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize bounds: {}", e)))
    }
}

impl WasmFigure {
    pub fn figure_bounds(&self) -> FigureBounds {
        let limits = self.inner.limits();
        let scale = self.inner.theme().px_per_unit;
        FigureBounds {
            min_x: limits.min.x,
            min_y: limits.min.y,
            max_x: limits.max.x,
            max_y: limits.max.y,
            width_px: (limits.max.x - limits.min.x) * scale,
            height_px: (limits.max.y - limits.min.y) * scale,
        }
    }
}
