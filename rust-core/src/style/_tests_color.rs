#[cfg(test)]
mod _tests_color {
    use super::super::color::Color;
    use super::super::palette::Palette;
    use crate::DiagramError;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::hex("#2563eb").unwrap(), Color::rgb(0x25, 0x63, 0xeb));
        assert_eq!(Color::hex("#2563EB").unwrap(), Color::rgb(0x25, 0x63, 0xeb));
        assert_eq!(Color::hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_invalid_hex_is_rejected() {
        for bad in ["2563eb", "#2563e", "#gg0000", "", "#", "#12345678"] {
            match Color::hex(bad) {
                Err(DiagramError::InvalidColor(value)) => assert_eq!(value, bad),
                other => panic!("Expected InvalidColor for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        let color: Color = "#8B4513".parse().unwrap();
        assert_eq!(color.to_string(), "#8b4513");
        assert_eq!(color.to_hex(), "#8b4513");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::rgb(0xdc, 0x26, 0x26)).unwrap();
        assert_eq!(json, "\"#dc2626\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(0xdc, 0x26, 0x26));
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }

    #[test]
    fn test_mix_endpoints() {
        let red = Color::rgb(0xdc, 0x26, 0x26);
        assert_eq!(red.mix(Color::WHITE, 0.0), red);
        assert_eq!(red.mix(Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(red.lighten(2.0), Color::WHITE);
    }

    #[test]
    fn test_palette_presets() {
        let classic = Palette::classic();
        assert_eq!(classic.blue.to_hex(), "#2563eb");
        assert_eq!(classic.rope.to_hex(), "#8b4513");
        assert_eq!(classic.ground.to_hex(), "#d4a574");

        let stem = Palette::stem_light();
        assert_eq!(stem.purple.to_hex(), "#9333ea");
        assert_eq!(stem.text.to_hex(), "#1f2937");
        assert_eq!(stem.panel.to_hex(), "#f3f4f6");
    }

    #[test]
    fn test_palette_lookup_by_name() {
        let palette = Palette::classic();
        assert_eq!(palette.get("red"), Some(palette.red));
        assert_eq!(palette.get("grey"), Some(palette.gray));
        assert_eq!(palette.get("magenta"), None);
    }
}
