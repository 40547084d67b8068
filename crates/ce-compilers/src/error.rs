//! Error types for compiler entry decoding.

/// Errors that can occur while decoding or encoding compiler entries.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Architecture token outside the fixed set.
    #[error("unknown architecture '{token}' (expected one of: arm32, arm64, x86_64, x86)")]
    UnknownArchitecture {
        /// The rejected token, verbatim.
        token: String,
    },

    /// A required field is absent from the serialized form.
    #[error("missing field: {field}")]
    MissingField {
        /// Dotted path of the field (e.g. "version.humanReadable").
        field: &'static str,
    },

    /// Version label is empty.
    #[error("version label must not be empty")]
    InvalidVersionLabel,

    /// An entry of a compiler list failed to decode.
    #[error("compiler entry {index}: {source}")]
    Entry {
        /// Zero-based position in the list.
        index: usize,
        /// Why the entry was rejected.
        source: Box<ConfigError>,
    },

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type for compiler entry operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
