use sheen_theme::{Appearance, ColorRole, GeometryToken, SpacingToken, Theme, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["default", "graphite", "high_contrast"]);
}

#[test]
fn preset_ids_round_trip() {
    for preset in ThemePreset::all() {
        assert_eq!(ThemePreset::from_id(preset.id()), Some(*preset));
    }
    assert_eq!(ThemePreset::from_id("solarized"), None);
}

#[test]
fn presets_have_distinct_light_and_dark_text() {
    for preset in ThemePreset::all() {
        let theme = preset.build();
        assert_ne!(
            theme.color_for(ColorRole::TextPrimary, Appearance::Light),
            theme.color_for(ColorRole::TextPrimary, Appearance::Dark),
            "Preset {:?} should have distinct light/dark text colors",
            preset
        );
    }
}

#[test]
fn every_role_resolves_in_both_appearances() {
    for preset in ThemePreset::all() {
        let theme = preset.build();
        for role in ColorRole::ALL {
            for appearance in [Appearance::Light, Appearance::Dark] {
                assert_eq!(
                    theme.color_for(role, appearance),
                    theme.palette().get(role).resolve(appearance),
                    "preset={preset:?} role={role:?} appearance={appearance:?}"
                );
            }
        }
    }
}

#[test]
fn default_theme_leaves_some_geometry_to_builtins() {
    let theme = ThemePreset::Default.build();
    assert_eq!(
        theme.geometry().get(GeometryToken::ButtonCornerRadius),
        Some(6.0)
    );
    assert_eq!(theme.geometry().get(GeometryToken::ScrollerWidth), None);
    assert_eq!(theme.geometry().get(GeometryToken::ListItemCornerRadius), None);
    assert_eq!(theme.geometry_value(GeometryToken::ScrollerWidth), None);
    assert_eq!(theme.spacing_value(SpacingToken::ContentSpacing), Some(8.0));
    assert_eq!(theme.spacing_value(SpacingToken::IconSpacing), None);
}

#[test]
fn preset_names_match_display_names() {
    for preset in ThemePreset::all() {
        assert_eq!(preset.build().name(), preset.display_name());
        assert_eq!(preset.to_string(), preset.display_name());
    }
}

#[test]
fn preset_deserializes_from_snake_case() {
    let preset: ThemePreset = serde_json::from_str("\"high_contrast\"").unwrap();
    assert_eq!(preset, ThemePreset::HighContrast);
}
