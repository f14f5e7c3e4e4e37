//! Themes built from TOML definitions
//!
//! The embedding application hands over a definition document; nothing is
//! read from disk here.
//!
//! ```toml
//! name = "Ocean"
//!
//! [palette]
//! text_primary = { light = "#1d1d1f", dark = "#f5f5f7" }
//! on_accent = "#ffffff"          # same color in both appearances
//! # ... every color role is required
//!
//! [geometry]
//! button_corner_radius = 10.0
//! list_edge_rounding = "always"
//!
//! [spacing]
//! content_spacing = 8.0
//! button_padding = { top = 6.0, leading = 14.0, bottom = 6.0, trailing = 14.0 }
//! ```
//!
//! A role missing from the palette is an error. A color that fails to parse
//! is not: it degrades to [`Color::FALLBACK`] so a typo never takes the UI down.

use crate::theme::{Appearance, ColorPair, Theme};
use crate::tokens::{ColorRole, GeometryTokens, Palette, SpacingTokens};
use serde::Deserialize;
use sheen_core::Color;
use std::collections::BTreeMap;
use thiserror::Error;

/// Error building a theme from a definition
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to parse theme definition: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("theme `{theme}` is missing the {appearance} color for `{role}`")]
    MissingColor {
        theme: String,
        role: &'static str,
        appearance: Appearance,
    },
    #[error("theme `{theme}` defines unknown color role `{role}`")]
    UnknownColorRole { theme: String, role: String },
}

/// Color specs for one role: either one spec for both appearances or a pair
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorPairSpec {
    Uniform(String),
    Pair {
        light: Option<String>,
        dark: Option<String>,
    },
}

impl ColorPairSpec {
    fn spec(&self, appearance: Appearance) -> Option<&str> {
        match (self, appearance) {
            (ColorPairSpec::Uniform(spec), _) => Some(spec),
            (ColorPairSpec::Pair { light, .. }, Appearance::Light) => light.as_deref(),
            (ColorPairSpec::Pair { dark, .. }, Appearance::Dark) => dark.as_deref(),
        }
    }
}

/// Deserialized theme definition
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeDefinition {
    pub name: String,
    #[serde(default)]
    pub palette: BTreeMap<String, ColorPairSpec>,
    #[serde(default)]
    pub geometry: GeometryTokens,
    #[serde(default)]
    pub spacing: SpacingTokens,
}

/// Theme built from a [`ThemeDefinition`]
#[derive(Clone, Debug)]
pub struct DefinedTheme {
    name: String,
    palette: Palette,
    geometry: GeometryTokens,
    spacing: SpacingTokens,
}

impl DefinedTheme {
    /// Parse a TOML definition and build the theme
    pub fn from_toml(source: &str) -> Result<Self, ThemeError> {
        let definition: ThemeDefinition = toml::from_str(source)?;
        Self::from_definition(definition)
    }

    /// Build the theme from an already deserialized definition
    pub fn from_definition(definition: ThemeDefinition) -> Result<Self, ThemeError> {
        let name = definition.name;

        if let Some(unknown) = definition
            .palette
            .keys()
            .find(|id| ColorRole::from_id(id).is_none())
        {
            return Err(ThemeError::UnknownColorRole {
                theme: name,
                role: unknown.clone(),
            });
        }

        let resolve = |role: ColorRole, appearance: Appearance| -> Result<Color, ThemeError> {
            let spec = definition
                .palette
                .get(role.id())
                .and_then(|pair| pair.spec(appearance))
                .ok_or_else(|| ThemeError::MissingColor {
                    theme: name.clone(),
                    role: role.id(),
                    appearance,
                })?;
            Ok(Color::parse(spec).unwrap_or_else(|err| {
                tracing::warn!(
                    theme = %name,
                    role = role.id(),
                    %appearance,
                    %err,
                    "malformed theme color, using fallback"
                );
                Color::FALLBACK
            }))
        };
        let pair = |role: ColorRole| -> Result<ColorPair, ThemeError> {
            Ok(ColorPair::new(
                resolve(role, Appearance::Light)?,
                resolve(role, Appearance::Dark)?,
            ))
        };

        let palette = Palette {
            text_primary: pair(ColorRole::TextPrimary)?,
            text_secondary: pair(ColorRole::TextSecondary)?,
            text_tertiary: pair(ColorRole::TextTertiary)?,
            background: pair(ColorRole::Background)?,
            control_background: pair(ColorRole::ControlBackground)?,
            accent: pair(ColorRole::Accent)?,
            on_accent: pair(ColorRole::OnAccent)?,
            danger: pair(ColorRole::Danger)?,
            border: pair(ColorRole::Border)?,
            separator: pair(ColorRole::Separator)?,
            highlight: pair(ColorRole::Highlight)?,
            scroller_thumb: pair(ColorRole::ScrollerThumb)?,
        };

        tracing::debug!(theme = %name, "built theme from definition");

        Ok(Self {
            name,
            palette,
            geometry: definition.geometry,
            spacing: definition.spacing,
        })
    }
}

impl Theme for DefinedTheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn geometry(&self) -> &GeometryTokens {
        &self.geometry
    }

    fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }
}
