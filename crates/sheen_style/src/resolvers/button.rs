//! Button style resolution

use serde::Serialize;
use sheen_core::{Color, EdgeInsets, Material};
use sheen_theme::{ColorRole, GeometryToken, PaddingToken, SpacingToken};

use super::ComponentStyle;
use crate::context::StyleContext;
use crate::environment::{IconAlignment, KeyId};
use crate::keys;
use crate::lookup::{apply_disabled, apply_state, shift, PRESSED_SHIFT};
use crate::state::{ComponentState, ControlRole};

/// Border width of bordered buttons
const BORDER_WIDTH: f32 = 1.0;
/// Alpha of the focus ring drawn around a focused button
const FOCUS_RING_ALPHA: f32 = 0.5;

/// Fully resolved button appearance
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonStyle {
    pub background: Color,
    pub foreground: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub corner_radius: f32,
    pub padding: EdgeInsets,
    pub min_height: f32,
    pub icon_alignment: IconAlignment,
    pub icon_spacing: f32,
    pub material: Material,
    pub focus_ring: Option<Color>,
}

impl ButtonStyle {
    pub fn resolve(cx: &StyleContext<'_>, state: &ComponentState) -> Self {
        let appearance = cx.appearance();
        let scale = cx.control_size(state).scale();
        let has_background = cx.flag(keys::BUTTON_HAS_BACKGROUND, true);
        let bordered = cx.flag(keys::BUTTON_BORDERED, false);

        let fill = match state.role {
            ControlRole::Normal => cx.color(ColorRole::ControlBackground),
            ControlRole::Primary => cx.lookup_color(keys::TINT, ColorRole::Accent).value,
            ControlRole::Destructive => cx.lookup_color(keys::TINT, ColorRole::Danger).value,
        };

        let background = if has_background {
            apply_state(fill, state, appearance)
        } else if state.is_engaged() && cx.flag(keys::HIGHLIGHT_ON_HOVER, true) {
            let highlight = cx.color(ColorRole::Highlight);
            if state.pressed {
                shift(highlight, PRESSED_SHIFT, appearance)
            } else {
                highlight
            }
        } else {
            Color::TRANSPARENT
        };

        // Without a fill, accent-colored buttons draw their label in the fill color
        let foreground = match (state.role, has_background) {
            (ControlRole::Normal, _) => cx.color(ColorRole::TextPrimary),
            (_, true) => cx.color(ColorRole::OnAccent),
            (_, false) => fill,
        };

        let (border_color, border_width) = if bordered {
            (
                apply_state(cx.color(ColorRole::Border), state, appearance),
                BORDER_WIDTH,
            )
        } else {
            (Color::TRANSPARENT, 0.0)
        };

        let focus_ring = (state.focused && !state.disabled)
            .then(|| cx.color(ColorRole::Accent).with_alpha(FOCUS_RING_ALPHA));

        Self {
            background,
            foreground: apply_disabled(foreground, state),
            border_color,
            border_width,
            corner_radius: cx
                .lookup_geometry(keys::BUTTON_CORNER_RADIUS, GeometryToken::ButtonCornerRadius)
                .value,
            padding: cx
                .lookup_padding(keys::BUTTON_PADDING, PaddingToken::Button)
                .map_unless_override(|padding| padding.scaled(scale))
                .value,
            min_height: cx
                .lookup_geometry(keys::BUTTON_MIN_HEIGHT, GeometryToken::ButtonMinHeight)
                .map_unless_override(|height| height * scale)
                .value,
            icon_alignment: cx.env().get(keys::ICON_ALIGNMENT).unwrap_or_default(),
            icon_spacing: cx
                .lookup_spacing(keys::ICON_SPACING, SpacingToken::IconSpacing)
                .value,
            material: cx.env().get(keys::BUTTON_MATERIAL).unwrap_or_default(),
            focus_ring,
        }
    }
}

impl ComponentStyle for ButtonStyle {
    type Params = ();

    const KEYS: &'static [KeyId] = &[
        keys::BUTTON_CORNER_RADIUS.id(),
        keys::BUTTON_PADDING.id(),
        keys::BUTTON_MIN_HEIGHT.id(),
        keys::ICON_SPACING.id(),
        keys::HIGHLIGHT_ON_HOVER.id(),
        keys::BUTTON_BORDERED.id(),
        keys::BUTTON_HAS_BACKGROUND.id(),
        keys::ICON_ALIGNMENT.id(),
        keys::CONTROL_SIZE.id(),
        keys::TINT.id(),
        keys::BUTTON_MATERIAL.id(),
    ];

    fn resolve_with(cx: &StyleContext<'_>, state: &ComponentState, _params: &()) -> Self {
        Self::resolve(cx, state)
    }
}
