use std::fs;
use std::path::Path;

use super::types::PaletteDocument;
use crate::error::ColorError;

/// On-disk encodings a palette document can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFormat {
    Toml,
    Json,
    Yaml,
}

impl PaletteFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ColorError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ColorError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }
}

impl std::str::FromStr for PaletteFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(PaletteFormat::Toml),
            "json" => Ok(PaletteFormat::Json),
            "yaml" | "yml" => Ok(PaletteFormat::Yaml),
            _ => Err(ColorError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl PaletteDocument {
    /// Parses a palette document held in memory.
    pub fn from_str_with_format(contents: &str, format: PaletteFormat) -> Result<Self, ColorError> {
        let document: PaletteDocument = match format {
            PaletteFormat::Toml => toml::from_str(contents)?,
            PaletteFormat::Json => serde_json::from_str(contents)?,
            PaletteFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        Ok(document)
    }
}

/// Reads a palette document, choosing the parser by file extension.
pub fn load_palette_file(path: impl AsRef<Path>) -> Result<PaletteDocument, ColorError> {
    let path = path.as_ref();
    let format = PaletteFormat::from_path(path)?;
    let contents = fs::read_to_string(path)?;
    log::debug!("Loading palette file {} as {format:?}", path.display());
    PaletteDocument::from_str_with_format(&contents, format)
}
