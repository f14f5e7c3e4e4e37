//! Divider style resolution

use serde::Serialize;
use sheen_core::Color;
use sheen_theme::{ColorRole, GeometryToken, SpacingToken};

use super::ComponentStyle;
use crate::context::StyleContext;
use crate::environment::KeyId;
use crate::keys;
use crate::state::ComponentState;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DividerStyle {
    pub color: Color,
    pub thickness: f32,
    /// Leading inset from the container edge
    pub inset: f32,
}

impl DividerStyle {
    pub fn resolve(cx: &StyleContext<'_>, _state: &ComponentState) -> Self {
        Self {
            color: cx.color(ColorRole::Separator),
            thickness: cx
                .lookup_geometry(keys::DIVIDER_THICKNESS, GeometryToken::DividerThickness)
                .value,
            inset: cx
                .lookup_spacing(keys::DIVIDER_INSET, SpacingToken::DividerInset)
                .value,
        }
    }
}

impl ComponentStyle for DividerStyle {
    type Params = ();

    const KEYS: &'static [KeyId] = &[keys::DIVIDER_THICKNESS.id(), keys::DIVIDER_INSET.id()];

    fn resolve_with(cx: &StyleContext<'_>, state: &ComponentState, _params: &()) -> Self {
        Self::resolve(cx, state)
    }
}
