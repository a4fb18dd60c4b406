use serde_json::Value;

use super::bound::Matcher;
use crate::config::MatcherConfig;
use crate::error::ColorError;
use crate::palette::{Palette, PaletteInput};

/// Builder for binding a palette to a [`Matcher`].
#[derive(Debug, Default)]
pub struct MatcherBuilder {
    colors: Option<PaletteInput>,
    config: MatcherConfig,
}

impl MatcherBuilder {
    /// Creates an empty builder using the `name` / `value` record fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the palette colors, in either input shape.
    pub fn colors(mut self, colors: impl Into<PaletteInput>) -> Self {
        self.colors = Some(colors.into());
        self
    }

    /// Sets the palette from name to color source pairs.
    pub fn mapping<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.colors(PaletteInput::mapping(pairs))
    }

    /// Sets the palette from flat records.
    pub fn records(self, records: Vec<Value>) -> Self {
        self.colors(PaletteInput::Records(records))
    }

    /// Sets the record field holding the display name.
    pub fn name_field(mut self, field: impl Into<String>) -> Self {
        self.config.name_field = field.into();
        self
    }

    /// Sets the record field holding the color source.
    pub fn value_field(mut self, field: impl Into<String>) -> Self {
        self.config.value_field = field.into();
        self
    }

    /// Replaces both field selectors at once.
    pub fn config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Ingests the palette and binds it. Bad entries are dropped; only a
    /// missing palette is an error.
    pub fn build(self) -> Result<Matcher, ColorError> {
        let colors = self
            .colors
            .ok_or_else(|| ColorError::InvalidPalette("No colors specified".to_string()))?;
        Ok(bind(colors, self.config))
    }
}

/// Binds `colors` to a matcher, reading records through the given fields
/// (`"name"` and `"value"` when omitted).
pub fn build_matcher(
    colors: impl Into<PaletteInput>,
    name_field: Option<&str>,
    value_field: Option<&str>,
) -> Matcher {
    let mut config = MatcherConfig::default();
    if let Some(field) = name_field {
        config.name_field = field.to_string();
    }
    if let Some(field) = value_field {
        config.value_field = field.to_string();
    }
    bind(colors.into(), config)
}

fn bind(colors: PaletteInput, config: MatcherConfig) -> Matcher {
    let supplied = colors.len();
    let palette = Palette::from_input(colors, &config);
    log::debug!(
        "Building matcher. entries={} dropped={} name_field={:?} value_field={:?}",
        palette.len(),
        supplied - palette.len(),
        config.name_field,
        config.value_field,
    );
    Matcher::new(palette, config)
}
