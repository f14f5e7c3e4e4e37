//! Label style resolution

use serde::{Deserialize, Serialize};
use sheen_core::Color;
use sheen_theme::ColorRole;

use super::ComponentStyle;
use crate::context::StyleContext;
use crate::environment::KeyId;
use crate::keys;
use crate::lookup::{apply_disabled, lookup};
use crate::state::ComponentState;

/// Emphasis level of a label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelTier {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

impl LabelTier {
    fn role(self) -> ColorRole {
        match self {
            LabelTier::Primary => ColorRole::TextPrimary,
            LabelTier::Secondary => ColorRole::TextSecondary,
            LabelTier::Tertiary => ColorRole::TextTertiary,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelStyle {
    pub color: Color,
    pub font_size: f32,
}

impl LabelStyle {
    pub fn resolve(cx: &StyleContext<'_>, state: &ComponentState, tier: LabelTier) -> Self {
        let color = cx.lookup_color(keys::LABEL_COLOR, tier.role()).value;
        let font_size = lookup(
            cx.env().get(keys::LABEL_FONT_SIZE),
            None,
            cx.control_size(state).font_size(),
        )
        .value;

        Self {
            color: apply_disabled(color, state),
            font_size,
        }
    }
}

impl ComponentStyle for LabelStyle {
    type Params = LabelTier;

    const KEYS: &'static [KeyId] = &[
        keys::LABEL_COLOR.id(),
        keys::LABEL_FONT_SIZE.id(),
        keys::CONTROL_SIZE.id(),
    ];

    fn resolve_with(cx: &StyleContext<'_>, state: &ComponentState, tier: &LabelTier) -> Self {
        Self::resolve(cx, state, *tier)
    }
}
