//! Environment configuration registry
//!
//! An [`Environment`] is a persistent chain of override scopes. Attaching
//! [`Overrides`] to a node yields a new environment whose lookups see the new
//! values first and fall back to the parent chain; the parent is never
//! modified, so siblings and ancestors keep seeing what they saw before.
//!
//! ```rust
//! use sheen_style::{keys, Environment, Overrides};
//!
//! let root = Environment::root();
//! let panel = root.scoped(Overrides::new().set(keys::BUTTON_CORNER_RADIUS, 4.0));
//! let row = panel.scoped(Overrides::new().set(keys::LIST_HAS_DIVIDER, false));
//!
//! assert_eq!(row.get(keys::BUTTON_CORNER_RADIUS), Some(4.0));
//! assert_eq!(row.get(keys::LIST_HAS_DIVIDER), Some(false));
//! assert_eq!(panel.get(keys::LIST_HAS_DIVIDER), None);
//! assert_eq!(root.get(keys::BUTTON_CORNER_RADIUS), None);
//! ```

use crate::state::ControlSize;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use sheen_core::{Color, EdgeInsets, Material};
use sheen_theme::CornerRounding;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Placement of an icon relative to its label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconAlignment {
    #[default]
    Leading,
    Trailing,
    Top,
    Bottom,
}

/// Identity of an environment key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(pub u16);

impl KeyId {
    /// First id free for keys defined outside this crate
    pub const FIRST_CUSTOM: u16 = 1024;
}

/// A stored override value
#[derive(Clone, Debug, PartialEq)]
pub enum EnvValue {
    Color(Color),
    Dimension(f32),
    Insets(EdgeInsets),
    Flag(bool),
    IconAlignment(IconAlignment),
    CornerRounding(CornerRounding),
    ControlSize(ControlSize),
    Material(Material),
}

/// Types that can be stored in the environment
pub trait EnvValueType: Clone + Sized {
    fn into_value(self) -> EnvValue;

    /// Extract the value, `None` when the stored kind differs
    fn from_value(value: &EnvValue) -> Option<Self>;
}

macro_rules! env_value_type {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl EnvValueType for $ty {
                fn into_value(self) -> EnvValue {
                    EnvValue::$variant(self)
                }

                fn from_value(value: &EnvValue) -> Option<Self> {
                    match value {
                        EnvValue::$variant(inner) => Some(inner.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

env_value_type! {
    Color => Color,
    f32 => Dimension,
    EdgeInsets => Insets,
    bool => Flag,
    IconAlignment => IconAlignment,
    CornerRounding => CornerRounding,
    ControlSize => ControlSize,
    Material => Material,
}

/// Typed environment key
///
/// The type parameter ties a key to the kind of value it holds, so reading a
/// radius key as a color does not compile.
pub struct EnvKey<T> {
    id: KeyId,
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> EnvKey<T> {
    /// Define a key. Ids below [`KeyId::FIRST_CUSTOM`] are reserved for [`crate::keys`].
    ///
    /// The id alone identifies the key in a scope. Two keys sharing an id
    /// shadow each other, and reading one where the nearest scope holds a
    /// value of the other's type yields `None`.
    pub const fn new(id: u16, name: &'static str) -> Self {
        Self {
            id: KeyId(id),
            name,
            _marker: PhantomData,
        }
    }

    pub const fn id(&self) -> KeyId {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for EnvKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EnvKey<T> {}

impl<T> fmt::Debug for EnvKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvKey")
            .field("id", &self.id.0)
            .field("name", &self.name)
            .finish()
    }
}

/// A set of overrides to attach to one node
///
/// Consumed on attachment; the resulting scope is read-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    values: FxHashMap<KeyId, EnvValue>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing an earlier value for the same key in this set
    pub fn set<T: EnvValueType>(mut self, key: EnvKey<T>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<T: EnvValueType>(&mut self, key: EnvKey<T>, value: T) {
        self.values.insert(key.id(), value.into_value());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug)]
struct Scope {
    values: FxHashMap<KeyId, EnvValue>,
    parent: Option<Arc<Scope>>,
    depth: usize,
}

/// Environment visible at one node of the composition tree
///
/// Cloning is cheap: scopes are shared, never copied.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    scope: Option<Arc<Scope>>,
}

impl Environment {
    /// Empty environment: every lookup is absent
    pub fn root() -> Self {
        Self::default()
    }

    /// Child environment with `overrides` layered on top of this one
    pub fn scoped(&self, overrides: Overrides) -> Self {
        if overrides.is_empty() {
            return self.clone();
        }
        let depth = self.depth() + 1;
        tracing::debug!(depth, keys = overrides.len(), "attached environment overrides");
        Self {
            scope: Some(Arc::new(Scope {
                values: overrides.values,
                parent: self.scope.clone(),
                depth,
            })),
        }
    }

    /// Nearest override for `key`, or `None` when no ancestor set it.
    ///
    /// The nearest scope holding the key's id decides; if its value has a
    /// different type, the result is `None` and farther ancestors are not
    /// consulted.
    pub fn get<T: EnvValueType>(&self, key: EnvKey<T>) -> Option<T> {
        self.get_value(key.id()).and_then(T::from_value)
    }

    /// Untyped lookup by key id
    pub fn get_value(&self, id: KeyId) -> Option<&EnvValue> {
        let mut scope = self.scope.as_deref();
        while let Some(current) = scope {
            if let Some(value) = current.values.get(&id) {
                return Some(value);
            }
            scope = current.parent.as_deref();
        }
        None
    }

    /// Whether any ancestor set `key`
    pub fn contains<T>(&self, key: EnvKey<T>) -> bool {
        self.get_value(key.id()).is_some()
    }

    /// Number of override scopes between this node and the root
    pub fn depth(&self) -> usize {
        self.scope.as_ref().map_or(0, |scope| scope.depth)
    }

    pub fn is_root(&self) -> bool {
        self.scope.is_none()
    }
}
