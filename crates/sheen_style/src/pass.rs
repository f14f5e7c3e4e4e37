//! Scoped composition pass
//!
//! The host framework walks its composition tree with one [`CompositionPass`].
//! Entering a node that attaches overrides pushes a scope; the returned
//! [`ScopeGuard`] pops it again when dropped, so an override is visible to
//! exactly the subtree that was traversed while the guard was alive.
//!
//! ```rust
//! use sheen_style::{
//!     keys, ComponentKind, ComponentState, CompositionPass, Overrides, ResolvedStyle,
//! };
//! use sheen_theme::{Appearance, ThemePreset};
//!
//! let mut pass = CompositionPass::new(ThemePreset::Default.build(), Appearance::Light);
//! {
//!     let sidebar = pass.enter(Overrides::new().set(keys::BUTTON_CORNER_RADIUS, 2.0));
//!     match sidebar.resolve(ComponentKind::Button, &ComponentState::idle()) {
//!         ResolvedStyle::Button(button) => assert_eq!(button.corner_radius, 2.0),
//!         _ => unreachable!(),
//!     }
//! }
//! assert!(pass.environment().is_root());
//! ```

use std::ops::{Deref, DerefMut};

use sheen_theme::Appearance;

use crate::context::{StyleContext, ThemeRef};
use crate::environment::{Environment, Overrides};
use crate::resolvers::{resolve_style, ComponentKind, ResolvedStyle};
use crate::state::ComponentState;

/// Resolution state for one traversal of the composition tree
///
/// The pass is the single writer of the environment stack; resolvers only
/// ever see a borrowed [`StyleContext`].
#[derive(Debug)]
pub struct CompositionPass {
    theme: ThemeRef,
    appearance: Appearance,
    env: Environment,
}

impl CompositionPass {
    pub fn new(theme: ThemeRef, appearance: Appearance) -> Self {
        Self::with_environment(theme, appearance, Environment::root())
    }

    /// Start from an environment supplied by the embedding application
    pub fn with_environment(theme: ThemeRef, appearance: Appearance, env: Environment) -> Self {
        tracing::debug!(
            theme = theme.name(),
            appearance = %appearance,
            depth = env.depth(),
            "composition pass started"
        );
        Self {
            theme,
            appearance,
            env,
        }
    }

    pub fn theme(&self) -> &ThemeRef {
        &self.theme
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        if self.appearance != appearance {
            tracing::debug!(from = %self.appearance, to = %appearance, "appearance changed");
            self.appearance = appearance;
        }
    }

    /// Environment at the current position of the traversal
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn context(&self) -> StyleContext<'_> {
        StyleContext::new(&self.theme, &self.env, self.appearance)
    }

    /// Attach `overrides` for the subtree traversed while the guard lives
    pub fn enter(&mut self, overrides: Overrides) -> ScopeGuard<'_> {
        let child = self.env.scoped(overrides);
        let saved = std::mem::replace(&mut self.env, child);
        ScopeGuard { pass: self, saved }
    }

    /// Closure form of [`enter`](Self::enter)
    pub fn with_scope<R>(&mut self, overrides: Overrides, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut guard = self.enter(overrides);
        f(&mut *guard)
    }

    pub fn resolve(&self, kind: ComponentKind, state: &ComponentState) -> ResolvedStyle {
        resolve_style(&self.context(), kind, state)
    }
}

/// Restores the enclosing environment when dropped
#[must_use = "the scope ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScopeGuard<'a> {
    pass: &'a mut CompositionPass,
    saved: Environment,
}

impl Deref for ScopeGuard<'_> {
    type Target = CompositionPass;

    fn deref(&self) -> &CompositionPass {
        self.pass
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut CompositionPass {
        self.pass
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        let saved = std::mem::take(&mut self.saved);
        tracing::trace!(
            from = self.pass.env.depth(),
            to = saved.depth(),
            "left environment scope"
        );
        self.pass.env = saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use sheen_theme::DefaultTheme;
    use std::sync::Arc;

    fn pass() -> CompositionPass {
        CompositionPass::new(Arc::new(DefaultTheme::new()), Appearance::Light)
    }

    #[test]
    fn test_guard_restores_environment() {
        let mut pass = pass();
        {
            let mut outer = pass.enter(Overrides::new().set(keys::CONTENT_SPACING, 2.0));
            assert_eq!(outer.environment().get(keys::CONTENT_SPACING), Some(2.0));
            {
                let inner = outer.enter(Overrides::new().set(keys::CONTENT_SPACING, 4.0));
                assert_eq!(inner.environment().get(keys::CONTENT_SPACING), Some(4.0));
                assert_eq!(inner.environment().depth(), 2);
            }
            assert_eq!(outer.environment().get(keys::CONTENT_SPACING), Some(2.0));
        }
        assert_eq!(pass.environment().get(keys::CONTENT_SPACING), None);
        assert!(pass.environment().is_root());
    }

    #[test]
    fn test_with_scope_returns_closure_result() {
        let mut pass = pass();
        let divider = pass.with_scope(Overrides::new().set(keys::LIST_HAS_DIVIDER, false), |pass| {
            pass.environment().get(keys::LIST_HAS_DIVIDER)
        });
        assert_eq!(divider, Some(false));
        assert_eq!(pass.environment().get(keys::LIST_HAS_DIVIDER), None);
    }

    #[test]
    fn test_siblings_do_not_see_each_other() {
        let mut pass = pass();
        pass.with_scope(Overrides::new().set(keys::BUTTON_BORDERED, true), |_| {});
        pass.with_scope(Overrides::new().set(keys::SCROLLER_WIDTH, 4.0), |pass| {
            assert_eq!(pass.environment().get(keys::BUTTON_BORDERED), None);
            assert_eq!(pass.environment().get(keys::SCROLLER_WIDTH), Some(4.0));
        });
    }

    #[test]
    fn test_set_appearance_inside_scope_persists() {
        let mut pass = pass();
        {
            let mut scope = pass.enter(Overrides::new().set(keys::TINT, sheen_core::Color::WHITE));
            scope.set_appearance(Appearance::Dark);
        }
        assert_eq!(pass.appearance(), Appearance::Dark);
    }
}
