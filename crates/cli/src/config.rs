//! TOML config file for the CLI
//!
//! ```toml
//! [inference]
//! schemaName = "events"
//! assumeNullable = true
//!
//! [reader]
//! sampleSize = 5000
//! delimiter = ";"
//! ```

use std::path::Path;

use schema_extract_core::{InferenceConfig, ReaderConfig};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Settings loaded from `--config`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub inference: InferenceConfig,
    pub reader: ReaderConfig,
}

impl CliConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::parse(&content).map_err(|error| CliError::Config {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse config file contents
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_tables() {
        let config = CliConfig::parse(
            r#"
            [inference]
            schemaName = "events"

            [reader]
            delimiter = ";"
            "#,
        )
        .unwrap();

        assert_eq!(config.inference.schema_name, "events");
        assert!(!config.inference.assume_nullable);
        assert_eq!(config.reader.delimiter, ';');
        assert_eq!(config.reader.sample_size, 1000);
    }

    #[test]
    fn test_unknown_table_rejected() {
        assert!(CliConfig::parse("[output]\nformat = \"yaml\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[reader]\nsampleSize = 0").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.reader.sample_size, 0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/schema-extract.toml")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
