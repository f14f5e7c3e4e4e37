//! Backdrop material descriptors
//!
//! A material is opaque to the resolution system: it is passed through from
//! overrides to the host renderer, which decides how to draw it.

use serde::Serialize;

/// Backdrop material a component may be drawn with
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Material {
    /// No backdrop, the resolved background color is painted directly
    #[default]
    None,
    Sidebar,
    Popover,
    Menu,
    HudWindow,
    UnderWindowBackground,
    /// Host-specific material identified by name
    Named(String),
}

impl Material {
    pub fn named(name: impl Into<String>) -> Self {
        Material::Named(name.into())
    }
}
