//! Resolution context passed through the composition traversal

use crate::environment::{EnvKey, Environment};
use crate::lookup::{lookup, Resolved};
use crate::state::{ComponentState, ControlSize};
use sheen_core::{Color, EdgeInsets};
use sheen_theme::{Appearance, ColorRole, GeometryToken, PaddingToken, SpacingToken, Theme};
use std::sync::Arc;

/// Shared handle to the active theme
pub type ThemeRef = Arc<dyn Theme>;

/// Everything a resolver reads: the active theme, the environment at the
/// node being resolved, and the current appearance.
///
/// Borrowed for the duration of one resolution; holds no state of its own.
#[derive(Clone, Copy, Debug)]
pub struct StyleContext<'a> {
    theme: &'a ThemeRef,
    env: &'a Environment,
    appearance: Appearance,
}

impl<'a> StyleContext<'a> {
    pub fn new(theme: &'a ThemeRef, env: &'a Environment, appearance: Appearance) -> Self {
        Self {
            theme,
            env,
            appearance,
        }
    }

    pub fn theme(&self) -> &'a ThemeRef {
        self.theme
    }

    pub fn env(&self) -> &'a Environment {
        self.env
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Theme color for a role in the current appearance
    pub fn color(&self, role: ColorRole) -> Color {
        self.theme.color_for(role, self.appearance)
    }

    /// Color override, else the theme's color for `role`. Palettes are total,
    /// so [`Color::FALLBACK`] is never reached.
    pub fn lookup_color(&self, key: EnvKey<Color>, role: ColorRole) -> Resolved<Color> {
        lookup(self.env.get(key), Some(self.color(role)), Color::FALLBACK)
    }

    pub fn lookup_geometry(&self, key: EnvKey<f32>, token: GeometryToken) -> Resolved<f32> {
        lookup(
            self.env.get(key),
            self.theme.geometry_value(token),
            token.builtin(),
        )
    }

    pub fn lookup_spacing(&self, key: EnvKey<f32>, token: SpacingToken) -> Resolved<f32> {
        lookup(
            self.env.get(key),
            self.theme.spacing_value(token),
            token.builtin(),
        )
    }

    pub fn lookup_padding(
        &self,
        key: EnvKey<EdgeInsets>,
        token: PaddingToken,
    ) -> Resolved<EdgeInsets> {
        lookup(
            self.env.get(key),
            self.theme.spacing().padding(token),
            token.builtin(),
        )
    }

    /// Behavioral flag: override, else built-in (themes carry no behavior)
    pub fn flag(&self, key: EnvKey<bool>, builtin: bool) -> bool {
        self.env.get(key).unwrap_or(builtin)
    }

    /// Size tier: the component's own, else the environment's, else regular
    pub fn control_size(&self, state: &ComponentState) -> ControlSize {
        state
            .control_size
            .or_else(|| self.env.get(crate::keys::CONTROL_SIZE))
            .unwrap_or_default()
    }
}
