//! Geometry tokens: corner radii, sizes, and list edge rounding

use serde::{Deserialize, Serialize};

/// Geometry token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum GeometryToken {
    ButtonCornerRadius,
    ButtonMinHeight,
    ListCornerRadius,
    ListItemCornerRadius,
    DividerThickness,
    ScrollerWidth,
}

impl GeometryToken {
    /// Built-in value used when neither an override nor the theme supplies one
    pub fn builtin(self) -> f32 {
        match self {
            GeometryToken::ButtonCornerRadius => 8.0,
            GeometryToken::ButtonMinHeight => 28.0,
            GeometryToken::ListCornerRadius => 8.0,
            GeometryToken::ListItemCornerRadius => 6.0,
            GeometryToken::DividerThickness => 1.0,
            GeometryToken::ScrollerWidth => 8.0,
        }
    }
}

/// When an edge of a list draws rounded corners
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerRounding {
    Never,
    Always,
    /// Rounded while the content fits inside the fixed-height threshold
    #[default]
    ConditionalOnFixedHeight,
}

impl CornerRounding {
    /// Whether the edge is rounded for the given content height.
    ///
    /// Without a threshold the list is unbounded, so the conditional variant
    /// never rounds.
    pub fn is_rounded(self, content_height: f32, threshold: Option<f32>) -> bool {
        match self {
            CornerRounding::Never => false,
            CornerRounding::Always => true,
            CornerRounding::ConditionalOnFixedHeight => {
                threshold.is_some_and(|threshold| content_height <= threshold)
            }
        }
    }
}

/// Geometry constants a theme may supply
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryTokens {
    pub button_corner_radius: Option<f32>,
    pub button_min_height: Option<f32>,
    pub list_corner_radius: Option<f32>,
    pub list_item_corner_radius: Option<f32>,
    pub divider_thickness: Option<f32>,
    pub scroller_width: Option<f32>,
    pub list_edge_rounding: Option<CornerRounding>,
}

impl GeometryTokens {
    /// Get a geometry value by token key, `None` when the theme has no opinion
    pub fn get(&self, token: GeometryToken) -> Option<f32> {
        match token {
            GeometryToken::ButtonCornerRadius => self.button_corner_radius,
            GeometryToken::ButtonMinHeight => self.button_min_height,
            GeometryToken::ListCornerRadius => self.list_corner_radius,
            GeometryToken::ListItemCornerRadius => self.list_item_corner_radius,
            GeometryToken::DividerThickness => self.divider_thickness,
            GeometryToken::ScrollerWidth => self.scroller_width,
        }
    }
}
