//! Environment keys understood by the built-in style resolvers

use crate::environment::{EnvKey, IconAlignment};
use crate::state::ControlSize;
use sheen_core::{Color, EdgeInsets, Material};
use sheen_theme::CornerRounding;

// Geometry
pub const BUTTON_CORNER_RADIUS: EnvKey<f32> = EnvKey::new(1, "button.corner_radius");
pub const BUTTON_PADDING: EnvKey<EdgeInsets> = EnvKey::new(2, "button.padding");
pub const BUTTON_MIN_HEIGHT: EnvKey<f32> = EnvKey::new(3, "button.min_height");
pub const LIST_CORNER_RADIUS: EnvKey<f32> = EnvKey::new(4, "list.corner_radius");
pub const LIST_ITEM_CORNER_RADIUS: EnvKey<f32> = EnvKey::new(5, "list_item.corner_radius");
pub const LIST_ITEM_PADDING: EnvKey<EdgeInsets> = EnvKey::new(6, "list_item.padding");
/// Content height up to which conditionally rounded list edges stay rounded
pub const LIST_FIXED_HEIGHT: EnvKey<f32> = EnvKey::new(7, "list.fixed_height");
pub const CONTENT_SPACING: EnvKey<f32> = EnvKey::new(8, "content_spacing");
pub const ICON_SPACING: EnvKey<f32> = EnvKey::new(9, "icon_spacing");
pub const DIVIDER_THICKNESS: EnvKey<f32> = EnvKey::new(10, "divider.thickness");
pub const DIVIDER_INSET: EnvKey<f32> = EnvKey::new(11, "divider.inset");
pub const SCROLLER_WIDTH: EnvKey<f32> = EnvKey::new(12, "scroller.width");
pub const LABEL_FONT_SIZE: EnvKey<f32> = EnvKey::new(13, "label.font_size");

// Behavior
pub const LIST_HAS_DIVIDER: EnvKey<bool> = EnvKey::new(32, "list.has_divider");
pub const HIGHLIGHT_ON_HOVER: EnvKey<bool> = EnvKey::new(33, "highlight_on_hover");
pub const BUTTON_BORDERED: EnvKey<bool> = EnvKey::new(34, "button.bordered");
pub const BUTTON_HAS_BACKGROUND: EnvKey<bool> = EnvKey::new(35, "button.has_background");
pub const SCROLLER_ALWAYS_VISIBLE: EnvKey<bool> = EnvKey::new(36, "scroller.always_visible");

// Choices
pub const ICON_ALIGNMENT: EnvKey<IconAlignment> = EnvKey::new(64, "icon_alignment");
pub const LIST_TOP_ROUNDING: EnvKey<CornerRounding> = EnvKey::new(65, "list.top_rounding");
pub const LIST_BOTTOM_ROUNDING: EnvKey<CornerRounding> = EnvKey::new(66, "list.bottom_rounding");
pub const CONTROL_SIZE: EnvKey<ControlSize> = EnvKey::new(67, "control_size");

// Colors
/// Fill of primary and destructive buttons
pub const TINT: EnvKey<Color> = EnvKey::new(96, "tint");
pub const LABEL_COLOR: EnvKey<Color> = EnvKey::new(97, "label.color");
pub const SCROLLER_THUMB_COLOR: EnvKey<Color> = EnvKey::new(98, "scroller.thumb_color");

// Materials
pub const LIST_MATERIAL: EnvKey<Material> = EnvKey::new(128, "list.material");
pub const SCROLLER_MATERIAL: EnvKey<Material> = EnvKey::new(129, "scroller.material");
pub const BUTTON_MATERIAL: EnvKey<Material> = EnvKey::new(130, "button.material");
