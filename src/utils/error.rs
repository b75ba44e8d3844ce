// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String), // Anything outside pdf/docx/txt

    #[error("Malformed document {path}: {reason}")]
    MalformedDocument { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ExtractError::MalformedDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read skill vocabulary: {0}")]
    Io(#[from] std::io::Error),

    #[error("Skill vocabulary is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid skill vocabulary: {0}")]
    InvalidVocabulary(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("CSV export error: {0}")]
    CsvError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Skill vocabulary error: {0}")]
    Vocabulary(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
