//! Error types for the CLI

use std::path::PathBuf;

use schema_extract_core::{InferenceError, ReaderError};
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Config file could not be read or parsed
    #[error("Invalid config file {path}: {error}")]
    Config { path: PathBuf, error: String },

    /// Source could not be read
    #[error(transparent)]
    Reader(#[from] ReaderError),

    /// Schema could not be inferred
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// Schema could not be rendered
    #[error("Failed to render schema: {0}")]
    Output(String),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) | CliError::Output(_) => 1,
            CliError::InvalidArgument(_) | CliError::Config { .. } => 2,
            CliError::Reader(e) => match e {
                ReaderError::FileNotFound(_) | ReaderError::Io(_) => 1,
                ReaderError::InvalidConfig(_) => 2,
                ReaderError::UnsupportedFormat(_) | ReaderError::FeatureDisabled { .. } => 5,
                ReaderError::Csv { .. } | ReaderError::Parquet { .. } => 3,
            },
            CliError::Inference(_) => 4,
        }
    }

    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            CliError::Reader(e) => e.user_message(),
            CliError::Inference(e) => e.user_message(),
            CliError::Config { path, error } => format!(
                "Could not load config file {}:\n{error}\n\n\
                Hint: The file must be TOML with optional [inference] and [reader] tables.",
                path.display()
            ),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = CliError::from(ReaderError::FileNotFound(PathBuf::from("x.csv")));
        assert_eq!(not_found.exit_code(), 1);

        let bad_arg = CliError::InvalidArgument("--delimiter".into());
        assert_eq!(bad_arg.exit_code(), 2);

        let malformed = CliError::from(ReaderError::Parquet {
            path: PathBuf::from("t.parquet"),
            error: "bad magic".into(),
        });
        assert_eq!(malformed.exit_code(), 3);

        let inference = CliError::from(InferenceError::DuplicateCatalogColumn("a".into()));
        assert_eq!(inference.exit_code(), 4);

        let unsupported = CliError::from(ReaderError::UnsupportedFormat("xlsx".into()));
        assert_eq!(unsupported.exit_code(), 5);
    }

    #[test]
    fn test_user_message_delegates_to_source() {
        let err = CliError::from(ReaderError::FileNotFound(PathBuf::from("missing.csv")));
        assert!(err.user_message().contains("Hint:"));
    }
}
