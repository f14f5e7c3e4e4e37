//! Sheen Theme System
//!
//! The theme protocol every Sheen theme implements, the tokens it supplies,
//! and the built-in themes.
//!
//! # Overview
//!
//! - **Theme protocol**: [`Theme`] exposes a [`Palette`] (one light/dark
//!   [`ColorPair`] per [`ColorRole`]), optional [`GeometryTokens`], and
//!   optional [`SpacingTokens`]
//! - **Appearance adapter**: [`ColorPair::resolve`] picks the variant for the
//!   active [`Appearance`]
//! - **Themes**: [`DefaultTheme`], [`GraphiteTheme`], [`HighContrastTheme`],
//!   and [`DefinedTheme`] built from a TOML definition
//!
//! # Quick Start
//!
//! ```rust
//! use sheen_theme::{Appearance, ColorRole, Theme, ThemePreset};
//!
//! let theme = ThemePreset::Default.build();
//! let accent = theme.color_for(ColorRole::Accent, Appearance::Dark);
//! assert_eq!(accent, theme.palette().accent.dark);
//! ```
//!
//! Themes are immutable once built. Per-view customization happens through
//! environment overrides in `sheen_style`, never by mutating a theme.

pub mod definition;
pub mod presets;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use definition::{ColorPairSpec, DefinedTheme, ThemeDefinition, ThemeError};
pub use presets::{preset_theme, ThemePreset};
pub use theme::{Appearance, ColorPair, Theme};
pub use themes::{DefaultTheme, GraphiteTheme, HighContrastTheme};
pub use tokens::*;
