//! Error types for format readers

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a sample from a source file
#[derive(Error, Debug)]
pub enum ReaderError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited text could not be read
    #[error("CSV error in {path}: {error}")]
    Csv { path: PathBuf, error: String },

    /// Columnar file metadata could not be read
    #[error("Parquet error in {path}: {error}")]
    Parquet { path: PathBuf, error: String },

    /// Format name not recognized
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Format known but compiled out
    #[error("{format} support not enabled. Build with --features {feature}")]
    FeatureDisabled {
        format: &'static str,
        feature: &'static str,
    },

    /// Invalid reader configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ReaderError {
    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            ReaderError::FileNotFound(path) => {
                format!(
                    "File not found: {}\n\nHint: Check that the file exists and the path is correct.",
                    path.display()
                )
            }
            ReaderError::Csv { path, error } => {
                format!(
                    "Could not read delimited text from {}:\n{error}\n\n\
                    Hint: Check the delimiter and that the first line is a header row.",
                    path.display()
                )
            }
            ReaderError::Parquet { path, error } => {
                format!(
                    "Could not read Parquet metadata from {}:\n{error}\n\n\
                    Hint: Ensure the file is a complete Parquet file.",
                    path.display()
                )
            }
            ReaderError::UnsupportedFormat(format) => {
                format!("Unsupported format: {format}\n\nHint: Expected one of: csv, jsonl, parquet.")
            }
            _ => self.to_string(),
        }
    }
}
