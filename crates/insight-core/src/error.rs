//! Error types for the insight core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for insight.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Document does not begin with a delimited metadata block.
    #[error("No front matter block in {path}")]
    MissingFrontMatter { path: PathBuf },

    /// A required front-matter field is absent or empty.
    #[error("Missing required front matter field `{field}` in {path}")]
    MissingField { path: PathBuf, field: &'static str },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new missing-front-matter error.
    pub fn missing_front_matter(path: impl Into<PathBuf>) -> Self {
        Self::MissingFrontMatter { path: path.into() }
    }

    /// Create a new missing-field error.
    pub fn missing_field(path: impl Into<PathBuf>, field: &'static str) -> Self {
        Self::MissingField {
            path: path.into(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("missing field");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_missing_front_matter_error() {
        let err = CoreError::missing_front_matter("contents/stocks/post/index.md");
        assert!(err.to_string().contains("No front matter block"));
        assert!(err.to_string().contains("contents/stocks/post/index.md"));
    }

    #[test]
    fn test_missing_field_error() {
        let err = CoreError::missing_field("contents/etf/post/index.md", "title");
        assert!(err.to_string().contains("`title`"));
        assert!(err.to_string().contains("contents/etf/post/index.md"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
