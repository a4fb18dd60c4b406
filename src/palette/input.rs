use serde_json::Value;

use crate::error::ColorError;

/// The two shapes a palette can be supplied in.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteInput {
    /// Name to color source pairs, in enumeration order
    Mapping(Vec<(String, String)>),
    /// Flat records whose name and value fields are picked by the config
    Records(Vec<Value>),
}

impl PaletteInput {
    /// Builds the mapping form from any iterator of pairs.
    pub fn mapping<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        PaletteInput::Mapping(
            pairs
                .into_iter()
                .map(|(name, source)| (name.into(), source.into()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            PaletteInput::Mapping(pairs) => pairs.len(),
            PaletteInput::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Value>> for PaletteInput {
    fn from(records: Vec<Value>) -> Self {
        PaletteInput::Records(records)
    }
}

impl From<Vec<(String, String)>> for PaletteInput {
    fn from(pairs: Vec<(String, String)>) -> Self {
        PaletteInput::Mapping(pairs)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PaletteInput {
    fn from(pairs: [(&str, &str); N]) -> Self {
        PaletteInput::mapping(pairs)
    }
}

/// JSON objects become the mapping form and arrays the record form.
///
/// Mapping values that are not strings are carried as their JSON text, so
/// they fail to normalize and get dropped at build time like any other bad
/// entry.
impl TryFrom<Value> for PaletteInput {
    type Error = ColorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(PaletteInput::Mapping(
                map.into_iter()
                    .map(|(name, source)| match source {
                        Value::String(source) => (name, source),
                        other => (name, other.to_string()),
                    })
                    .collect(),
            )),
            Value::Array(records) => Ok(PaletteInput::Records(records)),
            other => Err(ColorError::InvalidPalette(format!(
                "expected a mapping or an array of records, got {other}"
            ))),
        }
    }
}
