//! Newline-delimited JSON reader

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::config::{ReaderConfig, SourceFormat};
use super::error::ReaderError;
use super::{ChunkReader, ensure_exists};
use crate::inference::{Chunk, Row, ScalarValue};

/// Column name used for top-level values that are not objects
pub const SCALAR_VALUE_FIELD: &str = "_value";

/// Reads a JSONL file into one row chunk
#[derive(Debug, Clone)]
pub struct JsonlReader {
    path: PathBuf,
    config: ReaderConfig,
}

impl JsonlReader {
    pub fn new(path: impl Into<PathBuf>, config: ReaderConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read rows until the line number reaches `sample_size`
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line. Blank and unparseable
    /// lines are skipped without ending the sample.
    pub fn read_rows(&self) -> Result<Vec<Row>, ReaderError> {
        ensure_exists(&self.path)?;

        let reader = BufReader::new(File::open(&self.path)?);
        let mut rows = Vec::new();
        let mut skipped = 0usize;
        let mut line_number = 0usize;

        'segments: for segment in reader.split(b'\n') {
            let segment = segment?;
            let bytes: &[u8] = segment.strip_suffix(b"\r").unwrap_or(&segment);

            for line in bytes.split(|&b| b == b'\r') {
                line_number += 1;
                let text = String::from_utf8_lossy(line);
                let trimmed = text.trim();

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                let value: Value = match serde_json::from_str(trimmed) {
                    Ok(v) => v,
                    Err(e) => {
                        skipped += 1;
                        tracing::warn!(
                            path = %self.path.display(),
                            line = line_number,
                            "Skipping invalid JSON: {}",
                            e
                        );
                        continue;
                    }
                };

                rows.push(value_to_row(value));

                if self.config.sample_full(line_number) {
                    break 'segments;
                }
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            rows = rows.len(),
            skipped,
            "Read JSONL sample"
        );
        Ok(rows)
    }
}

/// Convert a parsed line into a row
pub fn value_to_row(value: Value) -> Row {
    match value {
        // Object keys are already unique
        Value::Object(map) => Row::from_distinct(
            map.into_iter()
                .map(|(k, v)| (k, ScalarValue::from(v)))
                .collect(),
        ),
        other => Row::new().with(SCALAR_VALUE_FIELD, ScalarValue::from(other)),
    }
}

impl ChunkReader for JsonlReader {
    fn format(&self) -> SourceFormat {
        SourceFormat::Jsonl
    }

    fn read_chunks(&self) -> Result<Vec<Chunk>, ReaderError> {
        Ok(vec![Chunk::Rows(self.read_rows()?)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_jsonl(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_object_keys_keep_document_order() {
        let row = value_to_row(json!({"zeta": 1, "alpha": "a"}));
        let names: Vec<&str> = row.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_non_object_lands_under_value_field() {
        let row = value_to_row(json!(42));
        assert_eq!(row.get(SCALAR_VALUE_FIELD), Some(&ScalarValue::Int(42)));
    }

    #[test]
    fn test_skips_blank_and_invalid_lines() {
        let file = write_jsonl("{\"id\":1}\n\nnot json\n{\"id\":2}\n");
        let rows = JsonlReader::new(file.path(), ReaderConfig::default())
            .read_rows()
            .unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let file = write_jsonl("{\"a\":1}\r{\"a\":2}\r\n{\"a\":3}");
        let rows = JsonlReader::new(file.path(), ReaderConfig::default())
            .read_rows()
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].get("a"), Some(&ScalarValue::Int(3)));

        let config = ReaderConfig::builder().sample_size(2).build();
        let rows = JsonlReader::new(file.path(), config).read_rows().unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_sample_size_counts_lines() {
        let file = write_jsonl("{\"a\":1}\n{\"a\":2}\n{\"a\":3}\n");
        let config = ReaderConfig::builder().sample_size(2).build();
        let rows = JsonlReader::new(file.path(), config).read_rows().unwrap();
        assert_eq!(rows.len(), 2);
    }
}
