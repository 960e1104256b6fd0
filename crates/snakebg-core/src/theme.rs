//! Theme lookup: resolves the host's `(intensity, colorTheme, style)` triple
//! into the numeric and color parameters used by the simulation.
//!
//! Resolution never fails. Unknown names fall back to `medium` / `gray` /
//! `modern` with a logged warning; the strict [`FromStr`] impls are there for
//! callers that want to surface the error themselves.

use crate::surface::Rgb;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown intensity `{0}` (expected low, medium or high)")]
    UnknownIntensity(String),
    #[error("unknown color theme `{0}` (expected gray, silver or charcoal)")]
    UnknownColorTheme(String),
    #[error("unknown style `{0}` (expected modern, minimal or elegant)")]
    UnknownStyle(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorTheme {
    #[default]
    Gray,
    Silver,
    Charcoal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Modern,
    Minimal,
    Elegant,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 3] = [ColorTheme::Gray, ColorTheme::Silver, ColorTheme::Charcoal];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorTheme::Gray => "gray",
            ColorTheme::Silver => "silver",
            ColorTheme::Charcoal => "charcoal",
        }
    }
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Modern, Style::Minimal, Style::Elegant];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Modern => "modern",
            Style::Minimal => "minimal",
            Style::Elegant => "elegant",
        }
    }
}

impl FromStr for Intensity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intensity::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownIntensity(s.to_owned()))
    }
}

impl FromStr for ColorTheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorTheme::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownColorTheme(s.to_owned()))
    }
}

impl FromStr for Style {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownStyle(s.to_owned()))
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration object handed over by the host page.
///
/// Deserializes from `{ intensity, colorTheme, style }` (`theme` is accepted
/// as an alias for `colorTheme`). Missing or unrecognized fields take their
/// defaults individually.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawConfig")]
pub struct BackgroundConfig {
    pub intensity: Intensity,
    pub color_theme: ColorTheme,
    pub style: Style,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    #[serde(deserialize_with = "lenient_name")]
    intensity: Option<String>,
    #[serde(deserialize_with = "lenient_name")]
    color_theme: Option<String>,
    /// Short-hand for `colorTheme`; the long name wins when both are set.
    #[serde(deserialize_with = "lenient_name")]
    theme: Option<String>,
    #[serde(deserialize_with = "lenient_name")]
    style: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NameOrOther {
    Name(String),
    Other(serde::de::IgnoredAny),
}

/// Non-string values are treated as absent so one bad field never discards
/// the others.
fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match NameOrOther::deserialize(deserializer)? {
        NameOrOther::Name(name) => Some(name),
        NameOrOther::Other(_) => {
            log::warn!("[theme] non-string config value; falling back to default");
            None
        }
    })
}

impl From<RawConfig> for BackgroundConfig {
    fn from(raw: RawConfig) -> Self {
        BackgroundConfig::from_names(
            raw.intensity.as_deref(),
            raw.color_theme.or(raw.theme).as_deref(),
            raw.style.as_deref(),
        )
    }
}

impl BackgroundConfig {
    pub fn new(intensity: Intensity, color_theme: ColorTheme, style: Style) -> Self {
        Self {
            intensity,
            color_theme,
            style,
        }
    }

    /// Lenient construction from optional names; never fails.
    pub fn from_names(intensity: Option<&str>, color_theme: Option<&str>, style: Option<&str>) -> Self {
        Self {
            intensity: parse_or_default(intensity),
            color_theme: parse_or_default(color_theme),
            style: parse_or_default(style),
        }
    }
}

fn parse_or_default<T>(name: Option<&str>) -> T
where
    T: FromStr<Err = ConfigError> + Default,
{
    match name {
        None => T::default(),
        Some(s) => s.parse().unwrap_or_else(|e| {
            log::warn!("[theme] {e}; falling back to default");
            T::default()
        }),
    }
}

/// Fully resolved parameter bundle. Computed once per engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub style: Style,
    pub entity_count: usize,
    pub trail_length: usize,
    pub base_speed: f32,
    pub particle_count: usize,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    /// CSS `background` value the host applies behind the canvas.
    pub background_gradient: &'static str,
}

impl Theme {
    pub fn resolve(config: &BackgroundConfig) -> Self {
        let (entity_count, trail_length, base_speed, particle_count) = match config.intensity {
            Intensity::Low => (3, 15, 0.8, 20),
            Intensity::Medium => (5, 25, 1.2, 35),
            Intensity::High => (8, 40, 1.8, 50),
        };
        let (primary, secondary, accent) = match config.color_theme {
            ColorTheme::Gray => (Rgb(75, 85, 99), Rgb(156, 163, 175), Rgb(107, 114, 128)),
            ColorTheme::Silver => (Rgb(100, 116, 139), Rgb(148, 163, 184), Rgb(71, 85, 105)),
            ColorTheme::Charcoal => (Rgb(55, 65, 81), Rgb(107, 114, 128), Rgb(31, 41, 55)),
        };
        let background_gradient = match config.style {
            Style::Minimal => "#ffffff",
            Style::Elegant => "linear-gradient(135deg, #f9fafb 0%, #f3f4f6 100%)",
            Style::Modern => "linear-gradient(135deg, #ffffff 0%, #f8fafc 50%, #f1f5f9 100%)",
        };
        Self {
            style: config.style,
            entity_count,
            trail_length,
            base_speed,
            particle_count,
            primary,
            secondary,
            accent,
            background_gradient,
        }
    }

    /// Shadows, head highlights and proximity links are modern-only.
    #[inline]
    pub fn is_modern(&self) -> bool {
        self.style == Style::Modern
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::resolve(&BackgroundConfig::default())
    }
}
