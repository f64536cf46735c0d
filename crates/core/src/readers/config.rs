//! Configuration types for format readers

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ReaderError;

/// Default number of records sampled per source
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

/// Supported source formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Delimited text with a header row
    Csv,
    /// Newline-delimited JSON objects
    Jsonl,
    /// Parquet columnar file
    Parquet,
}

impl SourceFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<SourceFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" | "tsv" => Some(SourceFormat::Csv),
            "jsonl" | "ndjson" | "json" => Some(SourceFormat::Jsonl),
            "parquet" | "pq" => Some(SourceFormat::Parquet),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Jsonl => "jsonl",
            SourceFormat::Parquet => "parquet",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceFormat {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "jsonl" | "ndjson" => Ok(SourceFormat::Jsonl),
            "parquet" => Ok(SourceFormat::Parquet),
            _ => Err(ReaderError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Configuration for reading a sample from a source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderConfig {
    /// Maximum number of records to sample (0 = all)
    pub sample_size: usize,
    /// Field delimiter for delimited text
    pub delimiter: char,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            delimiter: ',',
        }
    }
}

impl ReaderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }

    /// True once `count` records reach the sample bound
    pub fn sample_full(&self, count: usize) -> bool {
        self.sample_size > 0 && count >= self.sample_size
    }

    /// The delimiter as a single byte
    pub fn delimiter_byte(&self) -> Result<u8, ReaderError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                ReaderError::InvalidConfig(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    self.delimiter
                ))
            })
    }
}

/// Builder for ReaderConfig
#[derive(Debug, Default)]
pub struct ReaderConfigBuilder {
    config: ReaderConfig,
}

impl ReaderConfigBuilder {
    /// Set the sample size (0 = all records)
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    /// Set the field delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ReaderConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert_eq!(config.sample_size, 1000);
        assert_eq!(config.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_sample_full() {
        let bounded = ReaderConfig::builder().sample_size(2).build();
        assert!(!bounded.sample_full(1));
        assert!(bounded.sample_full(2));

        let unbounded = ReaderConfig::builder().sample_size(0).build();
        assert!(!unbounded.sample_full(usize::MAX));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let config = ReaderConfig::builder().delimiter('§').build();
        assert!(matches!(
            config.delimiter_byte(),
            Err(ReaderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("CSV".parse::<SourceFormat>().unwrap(), SourceFormat::Csv);
        assert_eq!("ndjson".parse::<SourceFormat>().unwrap(), SourceFormat::Jsonl);
        assert!(matches!(
            "xlsx".parse::<SourceFormat>(),
            Err(ReaderError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("data/events.NDJSON")),
            Some(SourceFormat::Jsonl)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("t.parquet")),
            Some(SourceFormat::Parquet)
        );
        assert_eq!(SourceFormat::from_path(Path::new("README")), None);
    }
}
