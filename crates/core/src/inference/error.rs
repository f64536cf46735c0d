//! Error types for schema inference

use thiserror::Error;

/// Errors that can occur during schema inference
///
/// Values never fail to classify; only native catalogs can make an
/// inference pass fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// A catalog chunk could not expose its column metadata
    #[error("Catalog introspection failed: {0}")]
    CatalogIntrospection(String),

    /// A catalog declared the same column name twice
    #[error("Catalog declares column '{0}' more than once")]
    DuplicateCatalogColumn(String),
}

impl InferenceError {
    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            InferenceError::CatalogIntrospection(reason) => format!(
                "Could not read column metadata: {reason}\n\n\
                Hint: Check that the columnar file is readable and the build enables its format."
            ),
            InferenceError::DuplicateCatalogColumn(name) => format!(
                "Column '{name}' appears more than once in the source metadata.\n\n\
                Hint: Field names must be unique within a schema."
            ),
        }
    }
}
