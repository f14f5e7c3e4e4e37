//! Input tracking for resolved styles
//!
//! A [`StyleObserver`] remembers the declared inputs of its last resolution
//! and re-resolves only when one of them changes: the theme instance, the
//! appearance, the component state, the family's extra parameters, or the
//! value of any environment key listed in [`ComponentStyle::KEYS`].

use sheen_theme::Appearance;
use smallvec::SmallVec;
use std::sync::Arc;

use crate::context::{StyleContext, ThemeRef};
use crate::environment::EnvValue;
use crate::resolvers::ComponentStyle;
use crate::state::ComponentState;

type KeySnapshot = SmallVec<[Option<EnvValue>; 8]>;

#[derive(Debug)]
struct Inputs<P> {
    theme: ThemeRef,
    appearance: Appearance,
    state: ComponentState,
    params: P,
    keys: KeySnapshot,
}

impl<P: PartialEq> Inputs<P> {
    fn matches(
        &self,
        cx: &StyleContext<'_>,
        state: &ComponentState,
        params: &P,
        keys: &KeySnapshot,
    ) -> bool {
        Arc::ptr_eq(&self.theme, cx.theme())
            && self.appearance == cx.appearance()
            && self.state == *state
            && self.params == *params
            && self.keys == *keys
    }
}

/// Caches the last resolved style of one component instance
#[derive(Debug)]
pub struct StyleObserver<S: ComponentStyle> {
    inputs: Option<Inputs<S::Params>>,
    style: Option<S>,
}

impl<S: ComponentStyle> Default for StyleObserver<S> {
    fn default() -> Self {
        Self {
            inputs: None,
            style: None,
        }
    }
}

impl<S: ComponentStyle> StyleObserver<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-resolve if any declared input changed.
    ///
    /// Returns the new style when it was recomputed, `None` when the cached
    /// style is still current.
    pub fn observe(
        &mut self,
        cx: &StyleContext<'_>,
        state: &ComponentState,
        params: &S::Params,
    ) -> Option<&S> {
        let keys: KeySnapshot = S::KEYS
            .iter()
            .map(|id| cx.env().get_value(*id).cloned())
            .collect();

        if let Some(inputs) = &self.inputs {
            if inputs.matches(cx, state, params, &keys) {
                return None;
            }
        }

        tracing::trace!(
            first = self.inputs.is_none(),
            keys = S::KEYS.len(),
            "style inputs changed, re-resolving"
        );

        self.inputs = Some(Inputs {
            theme: Arc::clone(cx.theme()),
            appearance: cx.appearance(),
            state: *state,
            params: params.clone(),
            keys,
        });
        self.style = Some(S::resolve_with(cx, state, params));
        self.style.as_ref()
    }

    /// Last resolved style, if any
    pub fn current(&self) -> Option<&S> {
        self.style.as_ref()
    }

    /// Forget the recorded inputs so the next `observe` re-resolves
    pub fn invalidate(&mut self) {
        self.inputs = None;
    }
}
