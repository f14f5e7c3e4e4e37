//! Built-in themes

pub mod default;
mod graphite;
mod high_contrast;

pub use default::DefaultTheme;
pub use graphite::GraphiteTheme;
pub use high_contrast::HighContrastTheme;
