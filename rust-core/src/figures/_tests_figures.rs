#[cfg(test)]
mod _tests_figures {
    use super::super::catalog::{build, catalog, names};
    use crate::config::{Z_OBJECT, Z_ROPE};
    use crate::geometries::Point;
    use crate::render::{DrawCommand, Figure};
    use crate::style::{Color, Theme, ThemePreset};
    use crate::DiagramError;

    fn arrow_vector(figure: &Figure, color: Color) -> Point {
        figure
            .items()
            .iter()
            .find_map(|item| match &item.command {
                DrawCommand::Arrow { start, end, stroke, .. } if stroke.color == color => Some(*end - *start),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no arrow in {}", color))
    }

    #[test]
    fn test_every_figure_builds_and_renders() {
        for preset in ThemePreset::ALL {
            let theme = Theme::preset(preset);
            for entry in catalog() {
                let figure = entry.build(&theme).unwrap();
                assert!(!figure.is_empty(), "{} is empty", entry.name);
                assert!(figure.title().is_some(), "{} has no title", entry.name);

                let svg = figure.to_svg().unwrap();
                assert!(svg.starts_with("<svg"), "{} did not render", entry.name);
                assert!(svg.trim_end().ends_with("</svg>"));
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut all: Vec<&str> = names().collect();
        let count = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), count);
        assert!(all.contains(&"fbd-floor"));
        assert!(all.contains(&"torque"));
    }

    #[test]
    fn test_unknown_figure() {
        match build("perpetual-motion", &Theme::default()) {
            Err(DiagramError::UnknownFigure(name)) => assert_eq!(name, "perpetual-motion"),
            other => panic!("Expected UnknownFigure, got {:?}", other.map(|f| f.len())),
        }
    }

    #[test]
    fn test_table_pulleys_rope_styles() {
        let figure = build("table-pulleys", &Theme::default()).unwrap();
        let ropes: Vec<&DrawCommand> = figure
            .items()
            .iter()
            .filter(|item| item.z == Z_ROPE)
            .map(|item| &item.command)
            .collect();

        // two horizontal lines to the wheels, two vertical bands down to the weights
        let level_lines = ropes
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Polyline { points, .. } if points.len() == 2 && (points[0].y - points[1].y).abs() < 1e-9 && (points[0].x - points[1].x).abs() > 0.5))
            .count();
        let bands = ropes
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Polygon { .. }))
            .count();
        assert_eq!(level_lines, 2);
        assert_eq!(bands, 2);
    }

    #[test]
    fn test_incline_weight_components_sum_to_weight() {
        let theme = Theme::default();
        let figure = build("fbd-incline", &theme).unwrap();
        let palette = &theme.palette;

        let weight = arrow_vector(&figure, palette.blue);
        let along = arrow_vector(&figure, palette.green);
        let across = arrow_vector(&figure, palette.purple);
        let normal = arrow_vector(&figure, palette.red);

        assert!((along + across).approx_eq(weight, 1e-9));
        assert!(along.dot(across).abs() < 1e-9);
        assert!((normal + across).approx_eq(Point::ORIGIN, 1e-9));
    }

    #[test]
    fn test_figures_follow_theme_palette() {
        let theme = Theme::preset(ThemePreset::StemLight);
        let figure = build("torque", &theme).unwrap();
        let has_green_ring = figure.items().iter().any(|item| match &item.command {
            DrawCommand::Circle { style, .. } => style.stroke.map(|s| s.color) == Some(theme.palette.green),
            _ => false,
        });
        assert!(has_green_ring);
        assert_eq!(figure.theme(), &theme);
    }

    #[test]
    fn test_default_line_width_reaches_every_figure() {
        let thin = Theme::default();
        let thick = Theme {
            default_line_width: 12.0,
            ..Theme::default()
        };
        for entry in catalog() {
            let a = entry.build(&thin).unwrap().to_svg().unwrap();
            let b = entry.build(&thick).unwrap().to_svg().unwrap();
            assert_ne!(a, b, "{} ignores default_line_width", entry.name);
        }

        let figure = build("fbd-incline", &thick).unwrap();
        let outline = figure.items().iter().find_map(|item| match &item.command {
            DrawCommand::Polygon { style, .. } if item.z == Z_OBJECT => style.stroke.map(|s| s.width),
            _ => None,
        });
        assert_eq!(outline, Some(9.0));
    }

    #[test]
    fn test_friction_opposes_push() {
        let theme = Theme::default();
        let figure = build("fbd-friction", &theme).unwrap();
        let palette = &theme.palette;

        let push = arrow_vector(&figure, palette.green);
        let friction = arrow_vector(&figure, palette.orange);
        assert!(push.x > 0.0 && push.y.abs() < 1e-12);
        assert!(friction.x < 0.0 && friction.y.abs() < 1e-12);

        let normal = arrow_vector(&figure, palette.red);
        let weight = arrow_vector(&figure, palette.blue);
        assert!((normal + weight).approx_eq(Point::ORIGIN, 1e-12));
    }

    #[test]
    fn test_single_pulley_scene() {
        let figure = build("fbd-pulley", &Theme::default()).unwrap();
        let items = figure.items();

        // one wheel: rim and hub
        let wheels = items
            .iter()
            .filter(|item| item.z == Z_OBJECT + 1 && matches!(item.command, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(wheels, 2);

        // a free-body dot for each block
        let dots = items.iter().filter(|item| matches!(item.command, DrawCommand::Marker { .. })).count();
        assert_eq!(dots, 2);

        // level rope to the rim, then a band hanging from the far side of the wheel
        let ropes: Vec<&DrawCommand> = items.iter().filter(|item| item.z == Z_ROPE).map(|item| &item.command).collect();
        let level = ropes
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Polyline { points, .. } if points.len() == 2 && (points[0].y - points[1].y).abs() < 1e-9 && (points[0].x - points[1].x).abs() > 0.5))
            .count();
        assert_eq!(level, 1);
        let band_x = ropes.iter().find_map(|cmd| match cmd {
            DrawCommand::Polygon { points, .. } => Some((points[0].x + points[1].x) / 2.0),
            _ => None,
        });
        assert!((band_x.unwrap() - 4.5).abs() < 1e-9);
    }
}
