//! Schema inference engine for sampled tabular data
//!
//! This module infers a flat record schema (field names, primitive types,
//! nullability) from chunks of sampled input.
//!
//! ## Features
//!
//! - **Type lattice** - Classify single values and merge observations with a
//!   monotonic widening rule (`null < boolean < int64 < float64 < string`)
//! - **Row inference** - Fold row records into an ordered field list
//! - **Catalog short-circuit** - Trust native column metadata when a columnar
//!   source supplies it
//! - **Nullability tracking** - Fields observed with null or empty values
//!
//! ## Example
//!
//! ```rust
//! use schema_extract_core::inference::{Chunk, PrimitiveType, Row, SchemaInferrer};
//!
//! let chunks = vec![Chunk::Rows(vec![
//!     Row::new().with("id", 1).with("name", "Alice"),
//!     Row::new().with("id", 2.5).with("name", ""),
//! ])];
//!
//! let schema = SchemaInferrer::new().infer(&chunks).unwrap();
//! assert_eq!(schema.field("id").unwrap().field_type, PrimitiveType::Float64);
//! assert!(schema.field("name").unwrap().nullable);
//! println!("{}", serde_json::to_string_pretty(&schema).unwrap());
//! ```

mod chunk;
mod classify;
mod config;
mod error;
mod inferrer;
mod merge;
mod native;
mod types;

pub use chunk::Chunk;
pub use classify::{classify, classify_text};
pub use config::{DEFAULT_SCHEMA_NAME, InferenceConfig, InferenceConfigBuilder};
pub use error::InferenceError;
pub use inferrer::{ColumnObservations, InferenceStats, SchemaInferrer, SchemaSource, infer};
pub use merge::{merge_all, merge_observations, merge_types};
pub use native::{CatalogColumn, ColumnCatalog, NativeType, native_type_to_simple};
pub use types::{Field, PrimitiveType, Row, ScalarValue, Schema};
