use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding requests or schema documents
#[derive(Error, Debug)]
pub enum DslError {
    /// Errors that occur during YAML parsing
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Errors that occur during JSON processing
    #[error("JSON processing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported DSL version
    #[error("Unsupported DSL version: {0}")]
    UnsupportedVersion(String),

    /// A schema document could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DslError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DslError::YamlError(_) => "ERR_DSL_YAML_PARSE",
            DslError::JsonError(_) => "ERR_DSL_JSON_PARSE",
            DslError::UnsupportedVersion(_) => "ERR_DSL_UNSUPPORTED_VERSION",
            DslError::Io { .. } => "ERR_DSL_IO",
        }
    }
}
