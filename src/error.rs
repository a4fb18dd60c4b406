use thiserror::Error;

/// Error types that can occur when resolving colors or loading palettes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A query color could not be normalized to an RGB triple
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    /// The palette definition has the wrong shape
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),
    /// Palette file could not be read
    #[error("IO error: {0}")]
    Io(String),
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// TOML deserialization errors
    #[error("TOML parse error: {0}")]
    TomlError(String),
    /// YAML deserialization errors
    #[error("YAML parse error: {0}")]
    YamlError(String),
    /// Palette file extension is not one we know how to read
    #[error("Unsupported palette format: {0}")]
    UnsupportedFormat(String),
}

impl From<std::io::Error> for ColorError {
    fn from(err: std::io::Error) -> Self {
        ColorError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ColorError {
    fn from(err: serde_json::Error) -> Self {
        ColorError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

impl From<toml::de::Error> for ColorError {
    fn from(err: toml::de::Error) -> Self {
        ColorError::TomlError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ColorError {
    fn from(err: serde_yaml::Error) -> Self {
        ColorError::YamlError(err.to_string())
    }
}
