//! Scroller style resolution

use serde::Serialize;
use sheen_core::{Color, Material};
use sheen_theme::{ColorRole, GeometryToken};

use super::ComponentStyle;
use crate::context::StyleContext;
use crate::environment::KeyId;
use crate::keys;
use crate::lookup::apply_state;
use crate::state::ComponentState;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScrollerStyle {
    pub thumb_color: Color,
    pub track_color: Color,
    pub width: f32,
    pub corner_radius: f32,
    /// Keep the scroller visible while idle instead of fading it out
    pub always_visible: bool,
    pub material: Material,
}

impl ScrollerStyle {
    pub fn resolve(cx: &StyleContext<'_>, state: &ComponentState) -> Self {
        let thumb = cx
            .lookup_color(keys::SCROLLER_THUMB_COLOR, ColorRole::ScrollerThumb)
            .value;
        let track_color = if state.is_engaged() {
            cx.color(ColorRole::Highlight)
        } else {
            Color::TRANSPARENT
        };
        let width = cx
            .lookup_geometry(keys::SCROLLER_WIDTH, GeometryToken::ScrollerWidth)
            .value;

        Self {
            thumb_color: apply_state(thumb, state, cx.appearance()),
            track_color,
            width,
            corner_radius: width / 2.0,
            always_visible: cx.flag(keys::SCROLLER_ALWAYS_VISIBLE, false),
            material: cx.env().get(keys::SCROLLER_MATERIAL).unwrap_or_default(),
        }
    }
}

impl ComponentStyle for ScrollerStyle {
    type Params = ();

    const KEYS: &'static [KeyId] = &[
        keys::SCROLLER_THUMB_COLOR.id(),
        keys::SCROLLER_WIDTH.id(),
        keys::SCROLLER_ALWAYS_VISIBLE.id(),
        keys::SCROLLER_MATERIAL.id(),
    ];

    fn resolve_with(cx: &StyleContext<'_>, state: &ComponentState, _params: &()) -> Self {
        Self::resolve(cx, state)
    }
}
