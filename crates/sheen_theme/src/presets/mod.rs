//! Built-in theme preset catalog.

use crate::theme::Theme;
use crate::themes::{DefaultTheme, GraphiteTheme, HighContrastTheme};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    /// Neutral system-style theme.
    #[default]
    Default,
    /// Monochrome accent, rounder controls.
    Graphite,
    /// Black/white surfaces for accessibility.
    HighContrast,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Graphite => "graphite",
            Self::HighContrast => "high_contrast",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Graphite => "Graphite",
            Self::HighContrast => "High Contrast",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 3] = [
            ThemePreset::Default,
            ThemePreset::Graphite,
            ThemePreset::HighContrast,
        ];
        &PRESETS
    }

    /// Look a preset up by its stable id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }

    /// Build the theme for this preset.
    pub fn build(self) -> Arc<dyn Theme> {
        tracing::debug!(preset = self.id(), "building theme preset");
        match self {
            Self::Default => Arc::new(DefaultTheme::new()),
            Self::Graphite => Arc::new(GraphiteTheme::new()),
            Self::HighContrast => Arc::new(HighContrastTheme::new()),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_theme(preset: ThemePreset) -> Arc<dyn Theme> {
    preset.build()
}
