//! High-contrast theme: pure black/white surfaces with heavy lines

use crate::theme::{ColorPair, Theme};
use crate::tokens::*;
use sheen_core::Color;

#[derive(Clone, Debug)]
pub struct HighContrastTheme {
    palette: Palette,
    geometry: GeometryTokens,
    spacing: SpacingTokens,
}

impl HighContrastTheme {
    pub fn new() -> Self {
        Self {
            palette: Palette {
                text_primary: ColorPair::new(Color::BLACK, Color::WHITE),
                text_secondary: ColorPair::new(
                    Color::from_hex(0x2B2B2B),
                    Color::from_hex(0xDADADA),
                ),
                text_tertiary: ColorPair::new(
                    Color::from_hex(0x4A4A4A),
                    Color::from_hex(0xB8B8B8),
                ),
                background: ColorPair::new(Color::WHITE, Color::BLACK),
                control_background: ColorPair::new(Color::WHITE, Color::BLACK),
                accent: ColorPair::new(Color::from_hex(0x0040DD), Color::from_hex(0x409CFF)),
                on_accent: ColorPair::new(Color::WHITE, Color::BLACK),
                danger: ColorPair::new(Color::from_hex(0xD70015), Color::from_hex(0xFF6961)),
                border: ColorPair::new(Color::BLACK, Color::WHITE),
                separator: ColorPair::new(Color::BLACK, Color::WHITE),
                highlight: ColorPair::new(
                    Color::BLACK.with_alpha(0.15),
                    Color::WHITE.with_alpha(0.2),
                ),
                scroller_thumb: ColorPair::new(Color::BLACK, Color::WHITE),
            },
            geometry: GeometryTokens {
                button_corner_radius: Some(4.0),
                divider_thickness: Some(2.0),
                scroller_width: Some(10.0),
                list_edge_rounding: Some(CornerRounding::Never),
                ..GeometryTokens::default()
            },
            spacing: SpacingTokens::default(),
        }
    }
}

impl Default for HighContrastTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for HighContrastTheme {
    fn name(&self) -> &str {
        "High Contrast"
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
