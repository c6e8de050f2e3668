//! Error handling for the course skill matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseMatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Model loading error: {0}")]
    ModelLoading(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Embedding generation error: {0}")]
    Embedding(String),

    #[error("Embedding dimensions don't match: {0} vs {1}")]
    DimensionMismatch(usize, usize),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Content analysis error: {0}")]
    Analysis(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CourseMatchError>;

/// model2vec-rs reports failures through anyhow
impl From<anyhow::Error> for CourseMatchError {
    fn from(err: anyhow::Error) -> Self {
        CourseMatchError::ModelLoading(err.to_string())
    }
}

impl From<toml::de::Error> for CourseMatchError {
    fn from(err: toml::de::Error) -> Self {
        CourseMatchError::Configuration(err.to_string())
    }
}
