//! Format readers producing inference chunks
//!
//! Each reader turns a source file into chunks for
//! [`SchemaInferrer`](crate::inference::SchemaInferrer):
//!
//! - **CSV** - one row chunk, every cell as text (feature `csv`)
//! - **JSONL** - one row chunk of typed JSON values
//! - **Parquet** - one native catalog chunk from the file footer (feature `parquet`)

mod config;
#[cfg(feature = "csv")]
mod csv_reader;
mod error;
mod jsonl_reader;
#[cfg(feature = "parquet")]
mod parquet_reader;

use std::path::Path;

pub use config::{DEFAULT_SAMPLE_SIZE, ReaderConfig, ReaderConfigBuilder, SourceFormat};
#[cfg(feature = "csv")]
pub use csv_reader::CsvReader;
pub use error::ReaderError;
pub use jsonl_reader::{JsonlReader, SCALAR_VALUE_FIELD, value_to_row};
#[cfg(feature = "parquet")]
pub use parquet_reader::ParquetReader;

use crate::inference::Chunk;

/// A source that yields chunks for inference
pub trait ChunkReader {
    /// The format this reader handles
    fn format(&self) -> SourceFormat;

    /// Read the sampled chunks
    fn read_chunks(&self) -> Result<Vec<Chunk>, ReaderError>;
}

/// Open a reader for `path` in the given format
pub fn open_reader(
    format: SourceFormat,
    path: &Path,
    config: &ReaderConfig,
) -> Result<Box<dyn ChunkReader>, ReaderError> {
    match format {
        SourceFormat::Csv => {
            #[cfg(feature = "csv")]
            {
                Ok(Box::new(CsvReader::new(path, config.clone())))
            }
            #[cfg(not(feature = "csv"))]
            {
                Err(ReaderError::FeatureDisabled {
                    format: "CSV",
                    feature: "csv",
                })
            }
        }
        SourceFormat::Jsonl => Ok(Box::new(JsonlReader::new(path, config.clone()))),
        SourceFormat::Parquet => {
            #[cfg(feature = "parquet")]
            {
                Ok(Box::new(ParquetReader::new(path)))
            }
            #[cfg(not(feature = "parquet"))]
            {
                Err(ReaderError::FeatureDisabled {
                    format: "Parquet",
                    feature: "parquet",
                })
            }
        }
    }
}

fn ensure_exists(path: &Path) -> Result<(), ReaderError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ReaderError::FileNotFound(path.to_path_buf()))
    }
}
