use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::ColorError,
    matcher::{Matcher, MatcherBuilder},
    palette::{Palette, PaletteInput},
};

const DEFAULT_NAME_FIELD: &str = "name";
const DEFAULT_VALUE_FIELD: &str = "value";

/// Field selectors used when a palette is given as an array of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Record field holding the display name
    pub name_field: String,
    /// Record field holding the color source
    pub value_field: String,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            name_field: DEFAULT_NAME_FIELD.to_string(),
            value_field: DEFAULT_VALUE_FIELD.to_string(),
        }
    }
}

impl MatcherConfig {
    pub fn new(name_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            name_field: name_field.into(),
            value_field: value_field.into(),
        }
    }
}

/// A palette definition as stored in a TOML, JSON or YAML file.
///
/// `colors` is either a table of name to color source, or an array of
/// records read through `name_field` / `value_field`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteDocument {
    #[serde(flatten)]
    pub config: MatcherConfig,
    pub colors: Value,
}

impl PaletteDocument {
    pub fn input(&self) -> Result<PaletteInput, ColorError> {
        PaletteInput::try_from(self.colors.clone())
    }

    pub fn palette(&self) -> Result<Palette, ColorError> {
        Ok(Palette::from_input(self.input()?, &self.config))
    }

    pub fn into_matcher(self) -> Result<Matcher, ColorError> {
        let input = PaletteInput::try_from(self.colors)?;
        MatcherBuilder::new()
            .config(self.config)
            .colors(input)
            .build()
    }
}
