/*!
 * Color tokens extracted from GPUI sources and their ZapUI constants.
 */

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Colors GPUI exposes as `gpui::<name>()` helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Green,
    Blue,
    Yellow,
    Black,
    White,
}

/// Channel values of a color constant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    /// Red, green, blue, alpha in `0.0..=1.0`
    Rgba(f64, f64, f64, f64),
    /// Hue, saturation, lightness, alpha in `0.0..=1.0`
    Hsla(f64, f64, f64, f64),
}

impl NamedColor {
    pub const ALL: [NamedColor; 6] = [
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Black,
        NamedColor::White,
    ];

    /// Parse a bare color name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Yellow => "yellow",
            NamedColor::Black => "black",
            NamedColor::White => "white",
        }
    }

    /// Canonical value GPUI uses for this helper
    ///
    /// GPUI's `green()` is `hsla(0.333, 1.0, 0.25, 1.0)`, not a half-intensity RGB green.
    pub fn value(&self) -> ColorValue {
        match self {
            NamedColor::Red => ColorValue::Rgba(1.0, 0.0, 0.0, 1.0),
            NamedColor::Green => ColorValue::Hsla(0.333, 1.0, 0.25, 1.0),
            NamedColor::Blue => ColorValue::Rgba(0.0, 0.0, 1.0, 1.0),
            NamedColor::Yellow => ColorValue::Rgba(1.0, 1.0, 0.0, 1.0),
            NamedColor::Black => ColorValue::Rgba(0.0, 0.0, 0.0, 1.0),
            NamedColor::White => ColorValue::Rgba(1.0, 1.0, 1.0, 1.0),
        }
    }
}

/// A color referenced by the source, normalized for set membership
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Hex digits of an `rgb(0x...)` literal, lowercase
    Hex(String),
    /// One of the GPUI named colors
    Named(NamedColor),
}

impl ColorToken {
    /// Token for a hex literal; digits are lowercased
    pub fn hex(digits: &str) -> Self {
        ColorToken::Hex(digits.to_ascii_lowercase())
    }

    /// Token for a named color, if `name` is one of the known helpers
    pub fn named(name: &str) -> Option<Self> {
        NamedColor::from_name(name).map(ColorToken::Named)
    }

    /// The normalized token string (`"336699"` or `"green"`)
    pub fn as_str(&self) -> &str {
        match self {
            ColorToken::Hex(digits) => digits,
            ColorToken::Named(color) => color.name(),
        }
    }

    /// Channel values, or `None` when a hex token is not exactly six hex digits
    pub fn value(&self) -> Option<ColorValue> {
        match self {
            ColorToken::Hex(digits) => {
                let (r, g, b) = hex_channels(digits)?;
                Some(ColorValue::Rgba(r, g, b, 1.0))
            }
            ColorToken::Named(color) => Some(color.value()),
        }
    }
}

// Sets of tokens are ordered by their token string
impl Ord for ColorToken {
    fn cmp(&self, other: &Self) -> Ordering {
        let is_named = |token: &ColorToken| matches!(token, ColorToken::Named(_));
        self.as_str()
            .cmp(other.as_str())
            .then_with(|| is_named(self).cmp(&is_named(other)))
    }
}

impl PartialOrd for ColorToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Round to three decimal places, halves away from zero
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Split six hex digits into normalized channels rounded to three decimals
pub fn hex_channels(digits: &str) -> Option<(f64, f64, f64)> {
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| -> Option<f64> {
        u8::from_str_radix(&digits[range], 16)
            .ok()
            .map(|byte| round3(f64::from(byte) / 255.0))
    };

    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
