//! Parquet metadata reader

use std::fs::File;
use std::path::{Path, PathBuf};

use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::config::SourceFormat;
use super::error::ReaderError;
use super::{ChunkReader, ensure_exists};
use crate::inference::Chunk;

/// Reads the Arrow schema from a Parquet footer as a catalog chunk
///
/// No row data is decoded.
#[derive(Debug, Clone)]
pub struct ParquetReader {
    path: PathBuf,
}

impl ParquetReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file's Arrow schema
    pub fn read_schema(&self) -> Result<arrow::datatypes::SchemaRef, ReaderError> {
        ensure_exists(&self.path)?;

        let file = File::open(&self.path)?;
        let builder =
            ParquetRecordBatchReaderBuilder::try_new(file).map_err(|e| ReaderError::Parquet {
                path: self.path.clone(),
                error: e.to_string(),
            })?;

        tracing::debug!(
            path = %self.path.display(),
            row_groups = builder.metadata().num_row_groups(),
            columns = builder.schema().fields().len(),
            "Read Parquet metadata"
        );

        Ok(builder.schema().clone())
    }
}

impl ChunkReader for ParquetReader {
    fn format(&self) -> SourceFormat {
        SourceFormat::Parquet
    }

    fn read_chunks(&self) -> Result<Vec<Chunk>, ReaderError> {
        Ok(vec![Chunk::catalog(self.read_schema()?)])
    }
}
