//! Design tokens for theming
//!
//! Tokens are the atomic values a theme supplies:
//! - Colors, as light/dark pairs per semantic role
//! - Geometry (corner radii, sizes, list edge rounding)
//! - Spacing (gaps and paddings)

mod color;
mod geometry;
mod spacing;

pub use color::*;
pub use geometry::*;
pub use spacing::*;
