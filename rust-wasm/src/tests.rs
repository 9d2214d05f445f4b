#[cfg(test)]
mod tests {
    use super::super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_figure_infos_match_catalog() {
        let infos = figure_infos();
        assert_eq!(infos.len(), figures::catalog().len());
        assert!(infos.iter().any(|info| info.name == "table-pulleys"));
        assert!(infos.iter().all(|info| !info.description.is_empty()));
    }

    #[wasm_bindgen_test]
    fn test_list_figures_round_trips_through_js() {
        let value = list_figures().unwrap();
        let parsed: Vec<FigureInfo> = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(parsed, figure_infos());
    }

    #[wasm_bindgen_test]
    fn test_render_figure_svg() {
        let svg = render_figure_svg("fbd-incline", None).unwrap();
        web_sys::console::log_1(&format!("fbd-incline SVG: {} bytes", svg.len()).into());

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[wasm_bindgen_test]
    fn test_presets_change_the_output() {
        let classic = render_figure_svg("torque", Some("classic".to_string())).unwrap();
        let light = render_figure_svg("torque", Some("stem-light".to_string())).unwrap();
        let default = render_figure_svg("torque", Some(String::new())).unwrap();

        assert_ne!(classic, light);
        assert_eq!(classic, default);
    }

    #[wasm_bindgen_test]
    fn test_unknown_names_are_errors() {
        assert!(WasmFigure::new("no-such-figure", None).is_err());
        assert!(WasmFigure::new("torque", Some("neon".to_string())).is_err());
        assert!(sample_motion("teleport", None, 30.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_figure_bounds_scale_with_theme() {
        let figure = WasmFigure::new("table-pulleys", None).unwrap();
        let bounds = figure.figure_bounds();
        let scale = physics_diagram::style::Theme::default().px_per_unit;

        assert_eq!(figure.name(), "table-pulleys");
        assert!(figure.command_count() > 0);
        assert!((bounds.width_px - (bounds.max_x - bounds.min_x) * scale).abs() < 1e-9);
        assert!(bounds.height_px > 0.0);
    }

    #[wasm_bindgen_test]
    fn test_sample_motion_ends_at_t_end() {
        let value = sample_motion("free-fall", Some(1.0), 10.0).unwrap();
        let samples: Vec<physics_diagram::kinematics::Sample> =
            serde_wasm_bindgen::from_value(value).unwrap();

        assert_eq!(samples.len(), 11);
        assert!((samples[samples.len() - 1].t - 1.0).abs() < 1e-12);
        assert!(samples[0].get("height").is_some());
    }
}
