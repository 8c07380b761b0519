//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the retention engine. The engine's core
//! computations (parsing, searching, scheduling) are infallible by contract
//! and express "cannot determine" outcomes as sentinel values; the error
//! types here cover the ambient layers around the engine: configuration,
//! dataset loading, and validation.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from configuration and ingestion components
//! - **Output**: Structured error types with context and error chains
//! - **Error Categories**: Configuration, Ingestion, Generic

use thiserror::Error;

/// Result type used throughout the application.
pub type Result<T> = std::result::Result<T, RetentionError>;

/// Error types for the retention engine's ambient layers.
#[derive(Debug, Error)]
pub enum RetentionError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Dataset file access errors
    #[error("Failed to read dataset {path}: {details}")]
    DatasetUnreadable { path: String, details: String },

    /// Dataset parsing errors
    #[error("Failed to parse dataset {path}: {details}")]
    DatasetParsing { path: String, details: String },

    /// Corpus entry rejected during validation
    #[error("Invalid corpus entry for code '{code}': {reason}")]
    InvalidCorpusEntry { code: String, reason: String },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal system errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl RetentionError {
    /// Get error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            RetentionError::Config { .. } | RetentionError::Toml(_) => "configuration",
            RetentionError::DatasetUnreadable { .. }
            | RetentionError::DatasetParsing { .. }
            | RetentionError::InvalidCorpusEntry { .. }
            | RetentionError::Json(_) => "ingestion",
            RetentionError::ValidationFailed { .. }
            | RetentionError::Io(_)
            | RetentionError::Internal { .. } => "generic",
        }
    }
}
