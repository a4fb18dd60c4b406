use serde::Serialize;

use crate::color::Rgb;

/// One palette entry: an optional display name, the color as it was
/// supplied, and its canonical triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSpec {
    /// Display name, if the palette supplied one
    pub name: Option<String>,
    /// Color as supplied, or the hex rendering of a raw triple
    pub source: String,
    /// Canonical triple the source normalized to
    pub rgb: Rgb,
}

impl ColorSpec {
    pub fn new(name: Option<String>, source: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name,
            source: source.into(),
            rgb,
        }
    }

    /// Spec for a bare triple, labelled by its hex rendering.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::new(None, rgb.to_hex(), rgb)
    }

    /// Display label: the name when present, otherwise the source string.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_source() {
        let unnamed = ColorSpec::from_rgb(Rgb::new(255, 0, 0));
        assert_eq!(unnamed.label(), "#ff0000");

        let named = ColorSpec::new(Some("Red".into()), "#f00", Rgb::new(255, 0, 0));
        assert_eq!(named.label(), "Red");
    }
}
