//! Sheen Core
//!
//! Value types shared by the Sheen theming crates:
//!
//! - [`Color`]: RGBA colors, with hex color-spec parsing that degrades to
//!   [`Color::FALLBACK`] on malformed input
//! - [`CornerRadius`] and [`EdgeInsets`]: geometry values carried by resolved styles
//! - [`Material`]: opaque backdrop descriptors passed through to the host renderer

pub mod color;
pub mod geometry;
pub mod material;

pub use color::{Color, ColorParseError};
pub use geometry::{CornerRadius, EdgeInsets};
pub use material::Material;
