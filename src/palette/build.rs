use serde_json::Value;

use super::entry::ColorSpec;
use super::input::PaletteInput;
use crate::color::{normalize, Rgb, NAMED_COLORS};
use crate::config::MatcherConfig;

/// Ordered, read-only collection of color specs a matcher searches.
///
/// Duplicates are allowed. Build order only matters as the tie-break between
/// equally distant entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<ColorSpec>,
}

impl Palette {
    /// Builds a palette from name to color source pairs.
    ///
    /// Pairs whose source does not normalize are skipped.
    pub fn from_mapping<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .filter_map(|(name, source)| ingest(Some(name.into()), source.into()))
            .collect();
        Self { entries }
    }

    /// Builds a palette from flat records, reading the display name from
    /// `name_field` and the color source from `value_field`.
    ///
    /// Records without a string color source, or whose source does not
    /// normalize, are skipped.
    pub fn from_records(records: &[Value], name_field: &str, value_field: &str) -> Self {
        let entries = records
            .iter()
            .filter_map(|record| {
                let name = field_label(record.get(name_field));
                let Some(source) = record.get(value_field).and_then(Value::as_str) else {
                    log::warn!(
                        "Skipping palette record {}: no string field {value_field:?}",
                        name.as_deref().unwrap_or("<unnamed>"),
                    );
                    return None;
                };
                ingest(name, source.to_string())
            })
            .collect();
        Self { entries }
    }

    /// Builds a palette from either input shape, using the configured field
    /// selectors for records.
    pub fn from_input(input: PaletteInput, config: &MatcherConfig) -> Self {
        match input {
            PaletteInput::Mapping(pairs) => Self::from_mapping(pairs),
            PaletteInput::Records(records) => {
                Self::from_records(&records, &config.name_field, &config.value_field)
            }
        }
    }

    /// Builds an unnamed palette from raw triples.
    pub fn from_rgb(colors: impl IntoIterator<Item = Rgb>) -> Self {
        Self {
            entries: colors.into_iter().map(ColorSpec::from_rgb).collect(),
        }
    }

    /// The basic CSS named colors as a palette.
    pub fn standard() -> Self {
        Self::from_mapping(NAMED_COLORS)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorSpec> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ColorSpec> for Palette {
    fn from_iter<T: IntoIterator<Item = ColorSpec>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorSpec;
    type IntoIter = std::slice::Iter<'a, ColorSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn ingest(name: Option<String>, source: String) -> Option<ColorSpec> {
    match normalize(source.as_str()) {
        Some(rgb) => Some(ColorSpec::new(name, source, rgb)),
        None => {
            log::warn!(
                "Skipping palette entry {}: invalid color {source:?}",
                name.as_deref().unwrap_or("<unnamed>"),
            );
            None
        }
    }
}

fn field_label(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn mapping_keeps_enumeration_order() {
        let palette = Palette::from_mapping([("white", "#fff"), ("black", "#000")]);
        let names: Vec<_> = palette.iter().map(ColorSpec::label).collect();
        assert_eq!(names, ["white", "black"]);
        assert_eq!(palette.iter().next().unwrap().rgb, Rgb::new(255, 255, 255));
    }

    #[test]
    fn mapping_drops_unparseable_sources() {
        let palette = Palette::from_mapping([("ok", "#abc"), ("bad", "#abcd"), ("worse", "nope")]);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.iter().next().unwrap().source, "#abc");
    }

    #[test]
    fn records_use_selected_fields() {
        let records = vec![
            json!({ "label": "Sky", "hex": "#87CEEB", "stock": 3 }),
            json!({ "label": "Mud", "hex": "rgb(112, 84, 62)" }),
        ];
        let palette = Palette::from_records(&records, "label", "hex");
        let specs: Vec<_> = palette.iter().cloned().collect();
        assert_eq!(
            specs,
            vec![
                ColorSpec::new(Some("Sky".into()), "#87CEEB", Rgb::new(135, 206, 235)),
                ColorSpec::new(Some("Mud".into()), "rgb(112, 84, 62)", Rgb::new(112, 84, 62)),
            ]
        );
    }

    #[test]
    fn records_without_usable_value_are_dropped() {
        let records = vec![
            json!({ "name": "missing" }),
            json!({ "name": "number", "value": 255 }),
            json!({ "name": "broken", "value": "#12" }),
            json!({ "name": "fine", "value": "navy" }),
        ];
        let palette = Palette::from_records(&records, "name", "value");
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.iter().next().unwrap().label(), "fine");
    }

    #[test]
    fn record_names_are_optional_and_stringified() {
        let records = vec![
            json!({ "value": "#010203" }),
            json!({ "name": null, "value": "#010203" }),
            json!({ "name": 42, "value": "#010203" }),
        ];
        let palette = Palette::from_records(&records, "name", "value");
        let labels: Vec<_> = palette.iter().map(ColorSpec::label).collect();
        assert_eq!(labels, ["#010203", "#010203", "42"]);
    }

    #[test]
    fn from_input_honors_config_fields() {
        let config = MatcherConfig::new("code", "hex");
        let input = PaletteInput::Records(vec![json!({ "code": "A1", "hex": "#000" })]);
        let palette = Palette::from_input(input, &config);
        assert_eq!(palette.iter().next().unwrap().label(), "A1");
    }

    #[test]
    fn raw_triples_get_hex_sources() {
        let palette = Palette::from_rgb([Rgb::new(255, 136, 0)]);
        assert_eq!(palette.iter().next().unwrap().source, "#ff8800");
        assert_eq!(palette.iter().next().unwrap().name, None);
    }

    #[test]
    fn standard_palette_covers_every_named_color() {
        assert_eq!(Palette::standard().len(), NAMED_COLORS.len());
    }
}
