// Host-side tests for theme resolution and host configuration parsing.

use snakebg_core::*;

fn expected_counts(intensity: Intensity) -> (usize, usize, usize, f32) {
    match intensity {
        Intensity::Low => (3, 15, 20, 0.8),
        Intensity::Medium => (5, 25, 35, 1.2),
        Intensity::High => (8, 40, 50, 1.8),
    }
}

#[test]
fn every_supported_triple_matches_lookup_table() {
    for intensity in Intensity::ALL {
        for color_theme in ColorTheme::ALL {
            for style in Style::ALL {
                let theme = Theme::resolve(&BackgroundConfig::new(intensity, color_theme, style));
                let (entities, trail, particles, speed) = expected_counts(intensity);
                assert_eq!(theme.entity_count, entities, "{intensity}/{color_theme}/{style}");
                assert_eq!(theme.trail_length, trail);
                assert_eq!(theme.particle_count, particles);
                assert!((theme.base_speed - speed).abs() < 1e-6);
                assert_eq!(theme.style, style);
                // Deterministic: resolving twice gives the same bundle.
                assert_eq!(theme, Theme::resolve(&BackgroundConfig::new(intensity, color_theme, style)));
            }
        }
    }
}

#[test]
fn palettes_match_color_theme() {
    let gray = Theme::resolve(&BackgroundConfig::new(Intensity::Medium, ColorTheme::Gray, Style::Modern));
    assert_eq!(gray.primary, Rgb(75, 85, 99));
    assert_eq!(gray.secondary, Rgb(156, 163, 175));
    assert_eq!(gray.accent, Rgb(107, 114, 128));

    let silver = Theme::resolve(&BackgroundConfig::new(Intensity::Medium, ColorTheme::Silver, Style::Modern));
    assert_eq!(silver.primary, Rgb(100, 116, 139));
    assert_eq!(silver.accent, Rgb(71, 85, 105));

    let charcoal = Theme::resolve(&BackgroundConfig::new(Intensity::Medium, ColorTheme::Charcoal, Style::Modern));
    assert_eq!(charcoal.secondary, Rgb(107, 114, 128));
    assert_eq!(charcoal.accent, Rgb(31, 41, 55));
}

#[test]
fn background_gradient_follows_style() {
    let css = |style| Theme::resolve(&BackgroundConfig::new(Intensity::Low, ColorTheme::Gray, style)).background_gradient;
    assert_eq!(css(Style::Minimal), "#ffffff");
    assert!(css(Style::Elegant).starts_with("linear-gradient(135deg, #f9fafb"));
    assert!(css(Style::Modern).contains("#f1f5f9"));
}

#[test]
fn unknown_names_fall_back_to_defaults() {
    let config = BackgroundConfig::from_names(Some("extreme"), Some("neon"), Some("brutalist"));
    assert_eq!(config, BackgroundConfig::default());
    assert_eq!(config.intensity, Intensity::Medium);
    assert_eq!(config.color_theme, ColorTheme::Gray);
    assert_eq!(config.style, Style::Modern);
}

#[test]
fn strict_parsing_reports_the_offending_name() {
    let err = "extreme".parse::<Intensity>().unwrap_err();
    assert_eq!(err, ConfigError::UnknownIntensity("extreme".into()));
    assert!(err.to_string().contains("extreme"));
}

#[test]
fn config_deserializes_from_host_object() {
    let config: BackgroundConfig =
        serde_json::from_str(r#"{"intensity":"high","colorTheme":"charcoal","style":"minimal"}"#).unwrap();
    assert_eq!(
        config,
        BackgroundConfig::new(Intensity::High, ColorTheme::Charcoal, Style::Minimal)
    );
}

#[test]
fn config_accepts_theme_alias_and_missing_fields() {
    let config: BackgroundConfig = serde_json::from_str(r#"{"theme":"silver"}"#).unwrap();
    assert_eq!(config.color_theme, ColorTheme::Silver);
    assert_eq!(config.intensity, Intensity::Medium);
    assert_eq!(config.style, Style::Modern);

    let empty: BackgroundConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, BackgroundConfig::default());
}

#[test]
fn config_falls_back_per_field() {
    let config: BackgroundConfig =
        serde_json::from_str(r#"{"intensity":"low","colorTheme":"purple","style":null}"#).unwrap();
    assert_eq!(config.intensity, Intensity::Low);
    assert_eq!(config.color_theme, ColorTheme::Gray);
    assert_eq!(config.style, Style::Modern);
}

#[test]
fn wrongly_typed_field_keeps_the_others() {
    let config: BackgroundConfig =
        serde_json::from_str(r#"{"intensity":"high","colorTheme":"charcoal","style":3}"#).unwrap();
    assert_eq!(config.intensity, Intensity::High);
    assert_eq!(config.color_theme, ColorTheme::Charcoal);
    assert_eq!(config.style, Style::Modern);

    let nested: BackgroundConfig =
        serde_json::from_str(r#"{"intensity":["low"],"colorTheme":{"x":1},"style":"elegant"}"#).unwrap();
    assert_eq!(nested.intensity, Intensity::Medium);
    assert_eq!(nested.color_theme, ColorTheme::Gray);
    assert_eq!(nested.style, Style::Elegant);
}

#[test]
fn color_theme_wins_over_theme_shorthand() {
    let config: BackgroundConfig =
        serde_json::from_str(r#"{"intensity":"low","colorTheme":"silver","theme":"charcoal"}"#).unwrap();
    assert_eq!(config.intensity, Intensity::Low);
    assert_eq!(config.color_theme, ColorTheme::Silver);

    let shorthand_only: BackgroundConfig =
        serde_json::from_str(r#"{"theme":"charcoal","colorTheme":null}"#).unwrap();
    assert_eq!(shorthand_only.color_theme, ColorTheme::Charcoal);
}
