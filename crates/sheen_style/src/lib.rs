//! Sheen Style Resolution
//!
//! Turns the active theme, the scoped environment overrides at a node, and a
//! component's interaction state into a concrete, immutable style.
//!
//! # Overview
//!
//! - **Environment**: [`Environment`] is a persistent chain of [`Overrides`]
//!   scopes keyed by typed [`EnvKey`]s (see [`keys`])
//! - **Lookup**: every attribute resolves override, then theme, then built-in
//!   constant via [`lookup`]; state tints derive from the resolved base color
//! - **Resolvers**: [`ButtonStyle`], [`ListItemStyle`], [`ListStyle`],
//!   [`ScrollerStyle`], [`DividerStyle`], [`LabelStyle`], plus the generic
//!   [`resolve_style`]
//! - **Composition**: [`CompositionPass`] carries theme, appearance and the
//!   current environment through a traversal; [`ScopeGuard`] reverts
//!   overrides when the subtree is left
//! - **Input tracking**: [`StyleObserver`] re-resolves only when a declared
//!   input changes
//!
//! # Quick Start
//!
//! ```rust
//! use sheen_style::{keys, ButtonStyle, ComponentState, Environment, Overrides, StyleContext};
//! use sheen_theme::{Appearance, ThemePreset};
//!
//! let theme = ThemePreset::Default.build();
//! let env = Environment::root().scoped(Overrides::new().set(keys::BUTTON_CORNER_RADIUS, 12.0));
//! let cx = StyleContext::new(&theme, &env, Appearance::Dark);
//!
//! let button = ButtonStyle::resolve(&cx, &ComponentState::idle().hovered(true));
//! assert_eq!(button.corner_radius, 12.0);
//! ```

pub mod context;
pub mod environment;
pub mod keys;
pub mod lookup;
pub mod observer;
pub mod pass;
pub mod resolvers;
pub mod state;

pub use context::{StyleContext, ThemeRef};
pub use environment::{EnvKey, EnvValue, EnvValueType, Environment, IconAlignment, KeyId, Overrides};
pub use lookup::{
    apply_disabled, apply_state, lookup, shift, Resolved, Source, DISABLED_OPACITY, HOVER_SHIFT,
    PRESSED_SHIFT,
};
pub use observer::StyleObserver;
pub use pass::{CompositionPass, ScopeGuard};
pub use resolvers::{
    resolve_style, ButtonStyle, ComponentKind, ComponentStyle, DividerStyle, LabelStyle, LabelTier,
    ListItemStyle, ListStyle, ResolvedStyle, ScrollerStyle,
};
pub use state::{ComponentState, ControlRole, ControlSize};
