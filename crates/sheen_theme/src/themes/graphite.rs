//! Graphite theme: monochrome accent and rounder controls

use crate::theme::{ColorPair, Theme};
use crate::tokens::*;
use sheen_core::{Color, EdgeInsets};

#[derive(Clone, Debug)]
pub struct GraphiteTheme {
    palette: Palette,
    geometry: GeometryTokens,
    spacing: SpacingTokens,
}

impl GraphiteTheme {
    pub fn new() -> Self {
        Self {
            palette: Palette {
                text_primary: ColorPair::new(Color::from_hex(0x242424), Color::from_hex(0xECECEC)),
                text_secondary: ColorPair::new(
                    Color::from_hex(0x5C5C5C),
                    Color::from_hex(0xB0B0B0),
                ),
                text_tertiary: ColorPair::new(Color::from_hex(0x9A9A9A), Color::from_hex(0x6E6E6E)),
                background: ColorPair::new(Color::from_hex(0xF6F6F6), Color::from_hex(0x232323)),
                control_background: ColorPair::new(
                    Color::from_hex(0xE8E8E8),
                    Color::from_hex(0x3C3C3C),
                ),
                accent: ColorPair::new(Color::from_hex(0x8E8E93), Color::from_hex(0x98989D)),
                on_accent: ColorPair::uniform(Color::WHITE),
                danger: ColorPair::new(Color::from_hex(0xC4392F), Color::from_hex(0xE5574C)),
                border: ColorPair::new(Color::from_hex(0xC8C8C8), Color::from_hex(0x505050)),
                separator: ColorPair::new(Color::from_hex(0xDDDDDD), Color::from_hex(0x3A3A3A)),
                highlight: ColorPair::new(
                    Color::BLACK.with_alpha(0.06),
                    Color::WHITE.with_alpha(0.1),
                ),
                scroller_thumb: ColorPair::new(
                    Color::BLACK.with_alpha(0.3),
                    Color::WHITE.with_alpha(0.3),
                ),
            },
            geometry: GeometryTokens {
                button_corner_radius: Some(10.0),
                button_min_height: Some(30.0),
                list_corner_radius: Some(12.0),
                list_item_corner_radius: Some(8.0),
                divider_thickness: Some(1.0),
                scroller_width: Some(7.0),
                list_edge_rounding: Some(CornerRounding::Always),
            },
            spacing: SpacingTokens {
                content_spacing: Some(8.0),
                icon_spacing: Some(8.0),
                divider_inset: Some(12.0),
                button_padding: Some(EdgeInsets::symmetric(14.0, 6.0)),
                list_item_padding: Some(EdgeInsets::symmetric(12.0, 8.0)),
            },
        }
    }
}

impl Default for GraphiteTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for GraphiteTheme {
    fn name(&self) -> &str {
        "Graphite"
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
