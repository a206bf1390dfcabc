//! Error types for loading and pricing saved estimates.
//!
//! The calculation core itself is total and never fails; errors only arise
//! from the document-loading surface and from pipeline-level validation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the estimate pipeline.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid estimate document: {message}")]
    InvalidDocument { message: String },

    #[error("Validation failed: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for estimate pipeline operations.
pub type Result<T> = std::result::Result<T, EstimateError>;
