//! Error handling for the resume scorer application
//!
//! The scoring engine itself never fails; these errors only come from
//! loading records, reading configuration and writing reports.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScorerError>;

impl From<toml::ser::Error> for ResumeScorerError {
    fn from(err: toml::ser::Error) -> Self {
        ResumeScorerError::Configuration(format!("Failed to serialize config: {}", err))
    }
}
