//! Spacing tokens: gaps and paddings

use serde::{Deserialize, Serialize};
use sheen_core::EdgeInsets;

/// Scalar spacing keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    ContentSpacing,
    IconSpacing,
    DividerInset,
}

impl SpacingToken {
    pub fn builtin(self) -> f32 {
        match self {
            SpacingToken::ContentSpacing => 6.0,
            SpacingToken::IconSpacing => 6.0,
            SpacingToken::DividerInset => 0.0,
        }
    }
}

/// Padding keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PaddingToken {
    Button,
    ListItem,
}

impl PaddingToken {
    /// Regular-size padding used when neither an override nor the theme supplies one
    pub fn builtin(self) -> EdgeInsets {
        match self {
            PaddingToken::Button => EdgeInsets::symmetric(12.0, 6.0),
            PaddingToken::ListItem => EdgeInsets::symmetric(10.0, 6.0),
        }
    }
}

/// Spacing constants a theme may supply
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacingTokens {
    pub content_spacing: Option<f32>,
    pub icon_spacing: Option<f32>,
    pub divider_inset: Option<f32>,
    pub button_padding: Option<EdgeInsets>,
    pub list_item_padding: Option<EdgeInsets>,
}

impl SpacingTokens {
    pub fn get(&self, token: SpacingToken) -> Option<f32> {
        match token {
            SpacingToken::ContentSpacing => self.content_spacing,
            SpacingToken::IconSpacing => self.icon_spacing,
            SpacingToken::DividerInset => self.divider_inset,
        }
    }

    pub fn padding(&self, token: PaddingToken) -> Option<EdgeInsets> {
        match token {
            PaddingToken::Button => self.button_padding,
            PaddingToken::ListItem => self.list_item_padding,
        }
    }
}
