//! List and list item style resolution

use serde::Serialize;
use sheen_core::{Color, CornerRadius, EdgeInsets, Material};
use sheen_theme::{ColorRole, CornerRounding, GeometryToken, PaddingToken, SpacingToken};

use super::{ComponentStyle, DividerStyle};
use crate::context::StyleContext;
use crate::environment::KeyId;
use crate::keys;
use crate::lookup::{apply_disabled, apply_state, lookup, shift, PRESSED_SHIFT};
use crate::state::ComponentState;

/// Alpha of secondary text on a selected row
const SELECTED_SECONDARY_ALPHA: f32 = 0.8;

/// Fully resolved appearance of one list row
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListItemStyle {
    pub background: Color,
    pub foreground: Color,
    pub secondary_foreground: Color,
    pub corner_radius: f32,
    pub padding: EdgeInsets,
    /// Divider drawn below the row, `None` when dividers are off
    pub divider: Option<DividerStyle>,
}

impl ListItemStyle {
    pub fn resolve(cx: &StyleContext<'_>, state: &ComponentState) -> Self {
        let appearance = cx.appearance();
        let scale = cx.control_size(state).scale();

        let background = if state.selected {
            apply_state(cx.color(ColorRole::Accent), state, appearance)
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

        let (foreground, secondary_foreground) = if state.selected {
            let on_accent = cx.color(ColorRole::OnAccent);
            (on_accent, on_accent.multiply_alpha(SELECTED_SECONDARY_ALPHA))
        } else {
            (
                cx.color(ColorRole::TextPrimary),
                cx.color(ColorRole::TextSecondary),
            )
        };

        let divider = cx
            .flag(keys::LIST_HAS_DIVIDER, true)
            .then(|| DividerStyle::resolve(cx, state));

        Self {
            background,
            foreground: apply_disabled(foreground, state),
            secondary_foreground: apply_disabled(secondary_foreground, state),
            corner_radius: cx
                .lookup_geometry(
                    keys::LIST_ITEM_CORNER_RADIUS,
                    GeometryToken::ListItemCornerRadius,
                )
                .value,
            padding: cx
                .lookup_padding(keys::LIST_ITEM_PADDING, PaddingToken::ListItem)
                .map_unless_override(|padding| padding.scaled(scale))
                .value,
            divider,
        }
    }
}

impl ComponentStyle for ListItemStyle {
    type Params = ();

    const KEYS: &'static [KeyId] = &[
        keys::LIST_ITEM_CORNER_RADIUS.id(),
        keys::LIST_ITEM_PADDING.id(),
        keys::HIGHLIGHT_ON_HOVER.id(),
        keys::LIST_HAS_DIVIDER.id(),
        keys::DIVIDER_THICKNESS.id(),
        keys::DIVIDER_INSET.id(),
        keys::CONTROL_SIZE.id(),
    ];

    fn resolve_with(cx: &StyleContext<'_>, state: &ComponentState, _params: &()) -> Self {
        Self::resolve(cx, state)
    }
}

/// Fully resolved appearance of a list container
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListStyle {
    pub background: Color,
    pub material: Material,
    pub corner_radius: f32,
    pub top_rounding: CornerRounding,
    pub bottom_rounding: CornerRounding,
    pub top_rounded: bool,
    pub bottom_rounded: bool,
    /// Per-corner radii after applying the edge rounding policy
    pub corners: CornerRadius,
    pub content_spacing: f32,
}

impl ListStyle {
    /// Resolve for a list whose content currently measures `content_height`
    pub fn resolve(cx: &StyleContext<'_>, _state: &ComponentState, content_height: f32) -> Self {
        let theme_rounding = cx.theme().geometry().list_edge_rounding;
        let top_rounding = lookup(
            cx.env().get(keys::LIST_TOP_ROUNDING),
            theme_rounding,
            CornerRounding::default(),
        )
        .value;
        let bottom_rounding = lookup(
            cx.env().get(keys::LIST_BOTTOM_ROUNDING),
            theme_rounding,
            CornerRounding::default(),
        )
        .value;

        let threshold = cx.env().get(keys::LIST_FIXED_HEIGHT);
        let corner_radius = cx
            .lookup_geometry(keys::LIST_CORNER_RADIUS, GeometryToken::ListCornerRadius)
            .value;
        let top_rounded = top_rounding.is_rounded(content_height, threshold);
        let bottom_rounded = bottom_rounding.is_rounded(content_height, threshold);

        Self {
            background: cx.color(ColorRole::Background),
            material: cx.env().get(keys::LIST_MATERIAL).unwrap_or_default(),
            corner_radius,
            top_rounding,
            bottom_rounding,
            top_rounded,
            bottom_rounded,
            corners: CornerRadius::edges(corner_radius, top_rounded, bottom_rounded),
            content_spacing: cx
                .lookup_spacing(keys::CONTENT_SPACING, SpacingToken::ContentSpacing)
                .value,
        }
    }
}

impl ComponentStyle for ListStyle {
    type Params = f32;

    const KEYS: &'static [KeyId] = &[
        keys::LIST_CORNER_RADIUS.id(),
        keys::LIST_TOP_ROUNDING.id(),
        keys::LIST_BOTTOM_ROUNDING.id(),
        keys::LIST_FIXED_HEIGHT.id(),
        keys::LIST_MATERIAL.id(),
        keys::CONTENT_SPACING.id(),
    ];

    fn resolve_with(cx: &StyleContext<'_>, state: &ComponentState, content_height: &f32) -> Self {
        Self::resolve(cx, state, *content_height)
    }
}
