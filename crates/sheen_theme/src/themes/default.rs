//! Default Sheen theme
//!
//! Neutral system-style palette with a blue accent. Leaves a few geometry
//! tokens unset so that the built-in constants apply.

use crate::theme::{ColorPair, Theme};
use crate::tokens::*;
use sheen_core::{Color, EdgeInsets};

/// Light palette
pub mod light {
    use sheen_core::Color;

    pub const LABEL: Color = Color::rgb(29.0 / 255.0, 29.0 / 255.0, 31.0 / 255.0);
    pub const SECONDARY_LABEL: Color = Color::rgb(110.0 / 255.0, 110.0 / 255.0, 115.0 / 255.0);
    pub const TERTIARY_LABEL: Color = Color::rgb(174.0 / 255.0, 174.0 / 255.0, 178.0 / 255.0);
    pub const WINDOW: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const CONTROL: Color = Color::rgb(242.0 / 255.0, 242.0 / 255.0, 247.0 / 255.0);
    pub const BLUE: Color = Color::rgb(0.0, 122.0 / 255.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 59.0 / 255.0, 48.0 / 255.0);
    pub const GRID: Color = Color::rgb(209.0 / 255.0, 209.0 / 255.0, 214.0 / 255.0);
    pub const SEPARATOR: Color = Color::rgb(229.0 / 255.0, 229.0 / 255.0, 234.0 / 255.0);
}

/// Dark palette
pub mod dark {
    use sheen_core::Color;

    pub const LABEL: Color = Color::rgb(245.0 / 255.0, 245.0 / 255.0, 247.0 / 255.0);
    pub const SECONDARY_LABEL: Color = Color::rgb(161.0 / 255.0, 161.0 / 255.0, 166.0 / 255.0);
    pub const TERTIARY_LABEL: Color = Color::rgb(99.0 / 255.0, 99.0 / 255.0, 102.0 / 255.0);
    pub const WINDOW: Color = Color::rgb(30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0);
    pub const CONTROL: Color = Color::rgb(58.0 / 255.0, 58.0 / 255.0, 60.0 / 255.0);
    pub const BLUE: Color = Color::rgb(10.0 / 255.0, 132.0 / 255.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 69.0 / 255.0, 58.0 / 255.0);
    pub const GRID: Color = Color::rgb(72.0 / 255.0, 72.0 / 255.0, 74.0 / 255.0);
    pub const SEPARATOR: Color = Color::rgb(56.0 / 255.0, 56.0 / 255.0, 58.0 / 255.0);
}

/// Default theme
#[derive(Clone, Debug)]
pub struct DefaultTheme {
    palette: Palette,
    geometry: GeometryTokens,
    spacing: SpacingTokens,
}

impl DefaultTheme {
    pub fn new() -> Self {
        Self {
            palette: Palette {
                text_primary: ColorPair::new(light::LABEL, dark::LABEL),
                text_secondary: ColorPair::new(light::SECONDARY_LABEL, dark::SECONDARY_LABEL),
                text_tertiary: ColorPair::new(light::TERTIARY_LABEL, dark::TERTIARY_LABEL),
                background: ColorPair::new(light::WINDOW, dark::WINDOW),
                control_background: ColorPair::new(light::CONTROL, dark::CONTROL),
                accent: ColorPair::new(light::BLUE, dark::BLUE),
                on_accent: ColorPair::uniform(Color::WHITE),
                danger: ColorPair::new(light::RED, dark::RED),
                border: ColorPair::new(light::GRID, dark::GRID),
                separator: ColorPair::new(light::SEPARATOR, dark::SEPARATOR),
                highlight: ColorPair::new(
                    Color::BLACK.with_alpha(0.05),
                    Color::WHITE.with_alpha(0.08),
                ),
                scroller_thumb: ColorPair::new(
                    Color::BLACK.with_alpha(0.35),
                    Color::WHITE.with_alpha(0.35),
                ),
            },
            geometry: GeometryTokens {
                button_corner_radius: Some(6.0),
                list_corner_radius: Some(10.0),
                divider_thickness: Some(1.0),
                ..GeometryTokens::default()
            },
            spacing: SpacingTokens {
                content_spacing: Some(8.0),
                button_padding: Some(EdgeInsets::symmetric(12.0, 5.0)),
                ..SpacingTokens::default()
            },
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DefaultTheme {
    fn name(&self) -> &str {
        "Default"
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
