//! Delimited text reader

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::config::{ReaderConfig, SourceFormat};
use super::error::ReaderError;
use super::{ChunkReader, ensure_exists};
use crate::inference::{Chunk, Row, ScalarValue};

/// Reads a header-led delimited text file into one row chunk
///
/// Every cell is handed over as text. Rows shorter than the header get
/// nulls for the missing cells; cells beyond the header are dropped.
#[derive(Debug, Clone)]
pub struct CsvReader {
    path: PathBuf,
    config: ReaderConfig,
}

impl CsvReader {
    pub fn new(path: impl Into<PathBuf>, config: ReaderConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read up to `sample_size` data rows
    pub fn read_rows(&self) -> Result<Vec<Row>, ReaderError> {
        ensure_exists(&self.path)?;
        let file = File::open(&self.path)?;
        self.read_rows_from(file)
    }

    fn read_rows_from<R: Read>(&self, source: R) -> Result<Vec<Row>, ReaderError> {
        let mut reader = ::csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter_byte()?)
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers: Vec<String> = reader
            .byte_headers()
            .map_err(|e| self.csv_error(e))?
            .iter()
            .map(|h| String::from_utf8_lossy(h).into_owned())
            .collect();
        let columns = header_columns(&headers);

        let mut rows = Vec::new();
        for (index, record) in reader.byte_records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(self.csv_error(e)),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        record = index,
                        "Skipping malformed record: {}",
                        e
                    );
                    continue;
                }
            };

            let values = columns
                .iter()
                .map(|(name, i)| {
                    let value = record.get(*i).map_or(ScalarValue::Null, |cell| {
                        ScalarValue::Text(String::from_utf8_lossy(cell).into_owned())
                    });
                    (name.clone(), value)
                })
                .collect();
            rows.push(Row::from_distinct(values));

            if self.config.sample_full(rows.len()) {
                break;
            }
        }

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "Read CSV sample");
        Ok(rows)
    }

    fn csv_error(&self, error: ::csv::Error) -> ReaderError {
        match error.into_kind() {
            ::csv::ErrorKind::Io(e) => ReaderError::Io(e),
            kind => ReaderError::Csv {
                path: self.path.clone(),
                error: format!("{:?}", kind),
            },
        }
    }
}

/// Distinct column names in first-seen order, each paired with the cell
/// index it reads from
///
/// A repeated header keeps its first position and takes the value of its
/// last occurrence.
fn header_columns(headers: &[String]) -> Vec<(String, usize)> {
    let mut columns: Vec<(String, usize)> = Vec::with_capacity(headers.len());
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(headers.len());

    for (cell, name) in headers.iter().enumerate() {
        match positions.get(name.as_str()) {
            Some(&pos) => columns[pos].1 = cell,
            None => {
                positions.insert(name, columns.len());
                columns.push((name.clone(), cell));
            }
        }
    }
    columns
}

impl ChunkReader for CsvReader {
    fn format(&self) -> SourceFormat {
        SourceFormat::Csv
    }

    fn read_chunks(&self) -> Result<Vec<Chunk>, ReaderError> {
        Ok(vec![Chunk::Rows(self.read_rows()?)])
    }
}
