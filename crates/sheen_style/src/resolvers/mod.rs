//! Per-family style resolvers
//!
//! Each resolver is a pure function of the [`StyleContext`] and the
//! component's [`ComponentState`]. It returns a fresh, immutable style
//! aggregate; nothing here is cached.

mod button;
mod divider;
mod label;
mod list;
mod scroller;

pub use button::ButtonStyle;
pub use divider::DividerStyle;
pub use label::{LabelStyle, LabelTier};
pub use list::{ListItemStyle, ListStyle};
pub use scroller::ScrollerStyle;

use serde::Serialize;
use std::fmt::Debug;

use crate::context::StyleContext;
use crate::environment::KeyId;
use crate::state::ComponentState;

/// A resolved style aggregate for one component family
pub trait ComponentStyle: Clone + PartialEq + Debug {
    /// Extra runtime input beyond the component state, `()` for most families
    type Params: Clone + PartialEq + Debug;

    /// Environment keys this family reads. A change to any other key never
    /// changes the resolved style.
    const KEYS: &'static [KeyId];

    fn resolve_with(cx: &StyleContext<'_>, state: &ComponentState, params: &Self::Params) -> Self;
}

/// Component family requested by a renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ComponentKind {
    Button,
    ListItem,
    /// List container with its current content height
    List { content_height: f32 },
    Scroller,
    Divider,
    Label(LabelTier),
}

impl ComponentKind {
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::ListItem => "list_item",
            ComponentKind::List { .. } => "list",
            ComponentKind::Scroller => "scroller",
            ComponentKind::Divider => "divider",
            ComponentKind::Label(_) => "label",
        }
    }
}

/// Resolved style of any component family
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedStyle {
    Button(ButtonStyle),
    ListItem(ListItemStyle),
    List(ListStyle),
    Scroller(ScrollerStyle),
    Divider(DividerStyle),
    Label(LabelStyle),
}

/// Resolve the style of `kind` in its current state
pub fn resolve_style(
    cx: &StyleContext<'_>,
    kind: ComponentKind,
    state: &ComponentState,
) -> ResolvedStyle {
    tracing::trace!(
        kind = kind.name(),
        appearance = %cx.appearance(),
        theme = cx.theme().name(),
        "resolving style"
    );

    match kind {
        ComponentKind::Button => ResolvedStyle::Button(ButtonStyle::resolve(cx, state)),
        ComponentKind::ListItem => ResolvedStyle::ListItem(ListItemStyle::resolve(cx, state)),
        ComponentKind::List { content_height } => {
            ResolvedStyle::List(ListStyle::resolve(cx, state, content_height))
        }
        ComponentKind::Scroller => ResolvedStyle::Scroller(ScrollerStyle::resolve(cx, state)),
        ComponentKind::Divider => ResolvedStyle::Divider(DividerStyle::resolve(cx, state)),
        ComponentKind::Label(tier) => ResolvedStyle::Label(LabelStyle::resolve(cx, state, tier)),
    }
}
