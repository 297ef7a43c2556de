use thiserror::Error;

/// Result type for configuration and export operations
pub type SwaggerResult<T> = Result<T, SwaggerError>;

/// Errors raised around document synthesis.
///
/// Synthesis itself never fails; these cover loading configuration and
/// exporting the finished document.
#[derive(Debug, Error)]
pub enum SwaggerError {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML configuration parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Prefix or version pattern failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Export format error
    #[error("Export format error: {0}")]
    Export(String),
}

impl SwaggerError {
    /// Create a new configuration error
    pub fn config_error<T: ToString>(msg: T) -> Self {
        Self::Config(msg.to_string())
    }

    /// Create a new export format error
    pub fn export_error<T: ToString>(msg: T) -> Self {
        Self::Export(msg.to_string())
    }

    /// Create a pattern error for the given source pattern
    pub fn pattern_error(pattern: &str, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.to_string(),
            source,
        }
    }
}
