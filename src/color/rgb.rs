use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matcher::euclidean_distance;

/// Canonical red/green/blue triple every comparison operates on.
///
/// Channels are expected to lie in `0..=255` but are never clamped; out of
/// range values flow straight into the distance math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: i32,
    /// Green channel
    pub g: i32,
    /// Blue channel
    pub b: i32,
}

impl Rgb {
    /// Creates a triple from its three channels.
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Renders the triple as a lowercase `#rrggbb` string.
    ///
    /// Negative channels keep their sign (`-0a`) and channels above 255
    /// widen past two digits, so the output only parses back for in-range
    /// triples.
    pub fn to_hex(&self) -> String {
        format!(
            "#{}{}{}",
            hex_channel(self.r),
            hex_channel(self.g),
            hex_channel(self.b)
        )
    }

    /// Euclidean distance to `other` in RGB space.
    pub fn distance(&self, other: &Rgb) -> f64 {
        euclidean_distance(self, other)
    }
}

fn hex_channel(value: i32) -> String {
    if value < 0 {
        format!("-{:02x}", value.unsigned_abs())
    } else {
        format!("{value:02x}")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(i32, i32, i32)> for Rgb {
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[i32; 3]> for Rgb {
    fn from([r, g, b]: [i32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Any color shape the normalizer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorInput<'a> {
    /// An already-canonical triple, passed through untouched
    Rgb(Rgb),
    /// A named color, hex string or `rgb(...)` string
    Text(&'a str),
}

impl fmt::Display for ColorInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorInput::Rgb(rgb) => rgb.fmt(f),
            ColorInput::Text(text) => f.write_str(text),
        }
    }
}

impl From<Rgb> for ColorInput<'_> {
    fn from(rgb: Rgb) -> Self {
        ColorInput::Rgb(rgb)
    }
}

impl From<(i32, i32, i32)> for ColorInput<'_> {
    fn from(triple: (i32, i32, i32)) -> Self {
        ColorInput::Rgb(triple.into())
    }
}

impl From<[i32; 3]> for ColorInput<'_> {
    fn from(triple: [i32; 3]) -> Self {
        ColorInput::Rgb(triple.into())
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(text: &'a str) -> Self {
        ColorInput::Text(text)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(text: &'a String) -> Self {
        ColorInput::Text(text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_hex_pads_each_channel() {
        assert_eq!(Rgb::new(255, 136, 0).to_hex(), "#ff8800");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn to_hex_keeps_out_of_range_channels_visible() {
        assert_eq!(Rgb::new(-10, 0, 256).to_hex(), "#-0a00100");
    }

    #[test]
    fn display_uses_functional_notation() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
        assert_eq!(ColorInput::from("#fff").to_string(), "#fff");
    }

    #[test]
    fn serializes_with_short_channel_names() {
        let json = serde_json::to_value(Rgb::new(247, 235, 52)).unwrap();
        assert_eq!(json, serde_json::json!({ "r": 247, "g": 235, "b": 52 }));
    }
}
