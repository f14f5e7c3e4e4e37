//! Theme protocol and appearance adapter

use crate::tokens::{
    ColorRole, GeometryToken, GeometryTokens, Palette, SpacingToken, SpacingTokens,
};
use serde::{Deserialize, Serialize};
use sheen_core::Color;
use std::fmt::{Display, Formatter};

/// Display appearance mode
///
/// Supplied by the host on every paint; themes hold both variants of each
/// color and never own the current mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Toggle between light and dark
    pub fn toggle(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

impl Display for Appearance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        })
    }
}

/// Light and dark variants of one semantic color
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColorPair {
    pub light: Color,
    pub dark: Color,
}

impl ColorPair {
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Same color in both appearances
    pub const fn uniform(color: Color) -> Self {
        Self {
            light: color,
            dark: color,
        }
    }

    /// Pick the variant for the active appearance
    pub fn resolve(&self, appearance: Appearance) -> Color {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        }
    }
}

/// Capability set every theme provides
///
/// A palette holds one [`ColorPair`] per [`ColorRole`], so a theme that leaves
/// a role out cannot be constructed. Geometry and spacing tokens are optional:
/// `None` means the theme has no opinion and resolution falls through to the
/// built-in constant.
pub trait Theme: std::fmt::Debug + Send + Sync {
    /// Theme name
    fn name(&self) -> &str;

    /// Semantic colors, both appearances
    fn palette(&self) -> &Palette;

    /// Corner radii, sizes, and edge rounding
    fn geometry(&self) -> &GeometryTokens;

    /// Spacing and paddings
    fn spacing(&self) -> &SpacingTokens;

    /// Color for a role in the given appearance
    fn color_for(&self, role: ColorRole, appearance: Appearance) -> Color {
        self.palette().get(role).resolve(appearance)
    }

    /// Geometry constant, `None` when the theme leaves it to the built-in
    fn geometry_value(&self, token: GeometryToken) -> Option<f32> {
        self.geometry().get(token)
    }

    fn spacing_value(&self, token: SpacingToken) -> Option<f32> {
        self.spacing().get(token)
    }
}
