//! Schema Extract Core - Schema inference for tabular data
//!
//! Provides:
//! - A primitive type lattice and value classification
//! - A chunked inference engine with native catalog short-circuit
//! - Format readers for CSV, JSONL and Parquet sources
//!
//! ## Example
//!
//! ```rust
//! use schema_extract_core::{Chunk, Row, infer};
//!
//! let chunk = Chunk::Rows(vec![
//!     Row::new().with("id", "1").with("score", "2.5"),
//!     Row::new().with("id", "2").with("score", ""),
//! ]);
//! let schema = infer(&[chunk]).unwrap();
//!
//! assert_eq!(schema.field_names(), vec!["id", "score"]);
//! assert!(schema.field("score").unwrap().nullable);
//! ```

pub mod inference;
pub mod readers;

pub use inference::{
    CatalogColumn, Chunk, ColumnCatalog, Field, InferenceConfig, InferenceError, InferenceStats,
    NativeType, PrimitiveType, Row, ScalarValue, Schema, SchemaInferrer, SchemaSource, infer,
};
pub use readers::{ChunkReader, ReaderConfig, ReaderError, SourceFormat, open_reader};
