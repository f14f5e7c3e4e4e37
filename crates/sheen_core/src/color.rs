//! RGBA colors and color-spec parsing

use serde::Serialize;
use thiserror::Error;

/// Error produced when a textual color specification cannot be parsed
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color specification")]
    Empty,
    #[error("color specification `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color specification `{spec}` has {len} hex digits, expected 3, 6 or 8")]
    InvalidLength { spec: String, len: usize },
    #[error("color specification `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

/// RGBA color with channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Color substituted for any color specification that fails to parse.
    ///
    /// Every malformed input maps to this exact value, so a broken theme entry
    /// renders consistently instead of failing the paint pass.
    pub const FALLBACK: Color = Color::BLACK;

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (case-insensitive, surrounding
    /// whitespace ignored).
    pub fn parse(spec: &str) -> Result<Self, ColorParseError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let hex = spec
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(spec.to_string()))?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(spec.to_string()));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16)
                .map_err(|_| ColorParseError::InvalidDigit(spec.to_string()))
        };

        match hex.len() {
            3 => {
                let r = channel(&hex[0..1])? * 17;
                let g = channel(&hex[1..2])? * 17;
                let b = channel(&hex[2..3])? * 17;
                Ok(Self::from_rgba8(r, g, b, 255))
            }
            6 => Ok(Self::from_rgba8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                255,
            )),
            8 => Ok(Self::from_rgba8(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            len => Err(ColorParseError::InvalidLength {
                spec: spec.to_string(),
                len,
            }),
        }
    }

    /// Parse a color specification, degrading to [`Color::FALLBACK`] when it
    /// is malformed.
    pub fn from_spec_or_fallback(spec: &str) -> Self {
        match Self::parse(spec) {
            Ok(color) => color,
            Err(err) => {
                tracing::warn!(%err, "malformed color specification, using fallback");
                Self::FALLBACK
            }
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Scale the alpha channel by `factor`
    pub fn multiply_alpha(mut self, factor: f32) -> Self {
        self.a = (self.a * factor).clamp(0.0, 1.0);
        self
    }

    /// Linear interpolation of all four channels
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Mix the color channels toward white, keeping alpha
    pub fn lighten(self, amount: f32) -> Self {
        Self::lerp(&self, &Self::WHITE.with_alpha(self.a), amount)
    }

    /// Mix the color channels toward black, keeping alpha
    pub fn darken(self, amount: f32) -> Self {
        Self::lerp(&self, &Self::BLACK.with_alpha(self.a), amount)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
