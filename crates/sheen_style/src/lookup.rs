//! Three-tier attribute lookup and state tints
//!
//! Every attribute resolves the same way: an environment override wins, then
//! the theme's value, then a built-in constant. Interaction states never get
//! their own colors; they are fixed transforms of the resolved base color.

use serde::Serialize;
use sheen_core::Color;
use sheen_theme::Appearance;

use crate::state::ComponentState;

/// Lightness shift applied to a hovered color
pub const HOVER_SHIFT: f32 = 0.08;
/// Lightness shift applied to a pressed color
pub const PRESSED_SHIFT: f32 = 0.16;
/// Alpha multiplier applied to disabled colors
pub const DISABLED_OPACITY: f32 = 0.5;

/// Tier that supplied a resolved value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Source {
    Override,
    Theme,
    Builtin,
}

/// A value and the tier it came from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Resolved<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            source: self.source,
        }
    }

    /// Apply `f` unless the value is an override; overrides are used verbatim
    pub fn map_unless_override(self, f: impl FnOnce(T) -> T) -> Self {
        match self.source {
            Source::Override => self,
            _ => self.map(f),
        }
    }
}

/// Resolve one attribute: override, then theme, then built-in
pub fn lookup<T>(override_value: Option<T>, theme_value: Option<T>, builtin: T) -> Resolved<T> {
    match (override_value, theme_value) {
        (Some(value), _) => Resolved {
            value,
            source: Source::Override,
        },
        (None, Some(value)) => Resolved {
            value,
            source: Source::Theme,
        },
        (None, None) => Resolved {
            value: builtin,
            source: Source::Builtin,
        },
    }
}

/// Shift a color away from the background: darker in light mode, lighter in dark mode
pub fn shift(color: Color, amount: f32, appearance: Appearance) -> Color {
    match appearance {
        Appearance::Light => color.darken(amount),
        Appearance::Dark => color.lighten(amount),
    }
}

/// Derive the color for the current interaction state from its base color
pub fn apply_state(base: Color, state: &ComponentState, appearance: Appearance) -> Color {
    if state.disabled {
        base.multiply_alpha(DISABLED_OPACITY)
    } else if state.pressed {
        shift(base, PRESSED_SHIFT, appearance)
    } else if state.hovered {
        shift(base, HOVER_SHIFT, appearance)
    } else {
        base
    }
}

/// Only the disabled transform; for colors that do not react to hover or press
pub fn apply_disabled(base: Color, state: &ComponentState) -> Color {
    if state.disabled {
        base.multiply_alpha(DISABLED_OPACITY)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_beats_theme_beats_builtin() {
        assert_eq!(
            lookup(Some(1.0), Some(2.0), 3.0),
            Resolved {
                value: 1.0,
                source: Source::Override
            }
        );
        assert_eq!(
            lookup(None, Some(2.0), 3.0),
            Resolved {
                value: 2.0,
                source: Source::Theme
            }
        );
        assert_eq!(
            lookup(None::<f32>, None, 3.0),
            Resolved {
                value: 3.0,
                source: Source::Builtin
            }
        );
    }

    #[test]
    fn test_override_beats_builtin_without_theme() {
        let resolved = lookup(Some(true), None, false);
        assert!(resolved.value);
        assert_eq!(resolved.source, Source::Override);
    }

    #[test]
    fn test_map_unless_override() {
        let scaled = lookup(None, Some(10.0), 8.0).map_unless_override(|v| v * 2.0);
        assert_eq!(scaled.value, 20.0);
        let verbatim = lookup(Some(10.0), None, 8.0).map_unless_override(|v| v * 2.0);
        assert_eq!(verbatim.value, 10.0);
    }

    #[test]
    fn test_state_transforms() {
        let base = Color::rgb(0.5, 0.5, 0.5);
        let idle = ComponentState::idle();
        assert_eq!(apply_state(base, &idle, Appearance::Light), base);

        let hovered = idle.hovered(true);
        assert_eq!(
            apply_state(base, &hovered, Appearance::Light),
            base.darken(HOVER_SHIFT)
        );
        assert_eq!(
            apply_state(base, &hovered, Appearance::Dark),
            base.lighten(HOVER_SHIFT)
        );

        let pressed = hovered.pressed(true);
        assert_eq!(
            apply_state(base, &pressed, Appearance::Light),
            base.darken(PRESSED_SHIFT)
        );

        let disabled = pressed.disabled(true);
        assert_eq!(apply_state(base, &disabled, Appearance::Light).a, 0.5);
        assert_eq!(apply_disabled(base, &disabled).a, 0.5);
        assert_eq!(apply_disabled(base, &hovered), base);
    }
}
