#[cfg(test)]
mod _tests_theme {
    use super::super::color::Color;
    use super::super::palette::Palette;
    use super::super::theme::{Theme, ThemePreset};
    use crate::DiagramError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_preset_parsing() {
        assert_eq!("classic".parse::<ThemePreset>().unwrap(), ThemePreset::Classic);
        assert_eq!("Stem-Light".parse::<ThemePreset>().unwrap(), ThemePreset::StemLight);
        assert_eq!("stem_light".parse::<ThemePreset>().unwrap(), ThemePreset::StemLight);
        assert!(matches!(
            "neon".parse::<ThemePreset>(),
            Err(DiagramError::UnknownPreset(_))
        ));

        for preset in ThemePreset::ALL {
            assert_eq!(preset.to_string().parse::<ThemePreset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_presets_use_their_palettes() {
        assert_eq!(Theme::preset(ThemePreset::Classic).palette, Palette::classic());
        assert_eq!(Theme::preset(ThemePreset::StemLight).palette, Palette::stem_light());
        assert_eq!(Theme::default(), Theme::preset(ThemePreset::Classic));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let theme = Theme::from_toml_str(
            r##"
            px_per_unit = 80.0

            [palette]
            red = "#b91c1c"
            "##,
        )
        .unwrap();
        let defaults = Theme::default();

        assert_abs_diff_eq!(theme.px_per_unit, 80.0);
        assert_eq!(theme.palette.red, Color::rgb(0xb9, 0x1c, 0x1c));
        assert_eq!(theme.palette.blue, defaults.palette.blue);
        assert_eq!(theme.font_family, defaults.font_family);
        assert_abs_diff_eq!(theme.default_line_width, defaults.default_line_width);
    }

    #[test]
    fn test_empty_toml_is_default_theme() {
        assert_eq!(Theme::from_toml_str("").unwrap(), Theme::default());
    }

    #[test]
    fn test_invalid_toml_values() {
        assert!(matches!(
            Theme::from_toml_str("background = \"white\""),
            Err(DiagramError::Theme(_))
        ));
        assert!(matches!(
            Theme::from_toml_str("px_per_unit = -1.0"),
            Err(DiagramError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Theme::load("/definitely/not/a/theme.toml");
        assert!(matches!(result, Err(DiagramError::Io(_))));
    }
}
