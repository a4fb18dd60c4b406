use std::sync::LazyLock;

use regex::Regex;

use super::named::named_color;
use super::rgb::{ColorInput, Rgb};
use crate::error::ColorError;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?i:([0-9a-f]{3}|[0-9a-f]{6}))$").expect("valid hex regex")
});

static RGB_FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*([0-9]{1,3}%?)\s*,\s*([0-9]{1,3}%?)\s*,\s*([0-9]{1,3}%?)\s*\)$")
        .expect("valid rgb() regex")
});

/// Normalizes any accepted color shape into a canonical triple.
///
/// Shapes are tried in order: a raw triple, a basic color name, a 3 or 6
/// digit hex string, then `rgb(...)` notation. Returns `None` when nothing
/// matches; callers decide whether that is fatal.
pub fn normalize<'a>(input: impl Into<ColorInput<'a>>) -> Option<Rgb> {
    match input.into() {
        ColorInput::Rgb(rgb) => Some(rgb),
        ColorInput::Text(text) => match named_color(text) {
            Some(hex) => parse_hex(hex),
            None => parse_hex(text).or_else(|| parse_rgb_function(text)),
        },
    }
}

/// Strict variant of [`normalize`] used for queries.
pub fn parse_color<'a>(input: impl Into<ColorInput<'a>>) -> Result<Rgb, ColorError> {
    let input = input.into();
    normalize(input).ok_or_else(|| ColorError::InvalidColor(input.to_string()))
}

/// Parses `#rgb` or `#rrggbb`, case-insensitively.
pub fn parse_hex(text: &str) -> Option<Rgb> {
    let caps = HEX_RE.captures(text)?;
    let digits = &caps[1];
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |range: std::ops::Range<usize>| i32::from_str_radix(&expanded[range], 16).ok();
    Some(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Parses `rgb(r, g, b)` where each component is 1-3 digits, optionally
/// followed by `%`.
pub fn parse_rgb_function(text: &str) -> Option<Rgb> {
    let caps = RGB_FUNCTION_RE.captures(text)?;
    Some(Rgb::new(
        rgb_component(&caps[1])?,
        rgb_component(&caps[2])?,
        rgb_component(&caps[3])?,
    ))
}

fn rgb_component(component: &str) -> Option<i32> {
    match component.strip_suffix('%') {
        Some(percent) => {
            let value: i32 = percent.parse().ok()?;
            Some((f64::from(value) * 255.0 / 100.0).round() as i32)
        }
        None => component.parse().ok(),
    }
}
