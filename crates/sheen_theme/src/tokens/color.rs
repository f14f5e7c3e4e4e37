//! Semantic color roles and palettes

use crate::theme::ColorPair;
use serde::Serialize;

/// Semantic color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
pub enum ColorRole {
    // Text
    TextPrimary,
    TextSecondary,
    TextTertiary,

    // Surfaces
    Background,
    ControlBackground,

    // Brand
    Accent,
    OnAccent,
    Danger,

    // Lines
    Border,
    Separator,

    // Interaction
    Highlight,
    ScrollerThumb,
}

impl ColorRole {
    /// Every role, in palette order
    pub const ALL: [ColorRole; 12] = [
        ColorRole::TextPrimary,
        ColorRole::TextSecondary,
        ColorRole::TextTertiary,
        ColorRole::Background,
        ColorRole::ControlBackground,
        ColorRole::Accent,
        ColorRole::OnAccent,
        ColorRole::Danger,
        ColorRole::Border,
        ColorRole::Separator,
        ColorRole::Highlight,
        ColorRole::ScrollerThumb,
    ];

    /// Stable id used as the key in theme definitions
    pub fn id(self) -> &'static str {
        match self {
            ColorRole::TextPrimary => "text_primary",
            ColorRole::TextSecondary => "text_secondary",
            ColorRole::TextTertiary => "text_tertiary",
            ColorRole::Background => "background",
            ColorRole::ControlBackground => "control_background",
            ColorRole::Accent => "accent",
            ColorRole::OnAccent => "on_accent",
            ColorRole::Danger => "danger",
            ColorRole::Border => "border",
            ColorRole::Separator => "separator",
            ColorRole::Highlight => "highlight",
            ColorRole::ScrollerThumb => "scroller_thumb",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.id() == id)
    }
}

/// Complete set of semantic colors, one light/dark pair per role
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette {
    pub text_primary: ColorPair,
    pub text_secondary: ColorPair,
    pub text_tertiary: ColorPair,
    pub background: ColorPair,
    pub control_background: ColorPair,
    pub accent: ColorPair,
    pub on_accent: ColorPair,
    pub danger: ColorPair,
    pub border: ColorPair,
    pub separator: ColorPair,
    pub highlight: ColorPair,
    pub scroller_thumb: ColorPair,
}

impl Palette {
    /// Get a color pair by role
    pub fn get(&self, role: ColorRole) -> ColorPair {
        match role {
            ColorRole::TextPrimary => self.text_primary,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::TextTertiary => self.text_tertiary,
            ColorRole::Background => self.background,
            ColorRole::ControlBackground => self.control_background,
            ColorRole::Accent => self.accent,
            ColorRole::OnAccent => self.on_accent,
            ColorRole::Danger => self.danger,
            ColorRole::Border => self.border,
            ColorRole::Separator => self.separator,
            ColorRole::Highlight => self.highlight,
            ColorRole::ScrollerThumb => self.scroller_thumb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_id(role.id()), Some(role));
        }
        assert_eq!(ColorRole::from_id("primary"), None);
    }
}
