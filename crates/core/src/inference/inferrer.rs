//! Schema inference engine

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::chunk::Chunk;
use super::classify::classify;
use super::config::InferenceConfig;
use super::error::InferenceError;
use super::merge::merge_types;
use super::native::{ColumnCatalog, native_type_to_simple};
use super::types::{Field, PrimitiveType, Row, ScalarValue, Schema};

/// Where the fields of an inferred schema came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaSource {
    /// Classified from row records
    #[default]
    RowRecords,
    /// Copied from a native column catalog
    Catalog,
}

/// Statistics from schema inference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceStats {
    /// Path the engine took
    pub source: SchemaSource,
    /// Chunks that contributed to the schema
    pub chunks_scanned: usize,
    /// Chunks that were empty or ignored
    pub chunks_skipped: usize,
    /// Total rows processed
    pub rows_scanned: usize,
    /// Total `(name, value)` pairs classified
    pub values_observed: usize,
    /// Fields in the emitted schema
    pub fields_discovered: usize,
}

#[derive(Debug, Clone, PartialEq)]
struct ObservedColumn {
    name: String,
    field_type: PrimitiveType,
    nullable: bool,
}

/// Ordered accumulator of per-column observations
///
/// Columns keep the order in which they were first seen. The type only ever
/// widens and the nullable flag only ever turns on.
#[derive(Debug, Clone, Default)]
pub struct ColumnObservations {
    columns: Vec<ObservedColumn>,
    index: HashMap<String, usize>,
    rows: usize,
    values: usize,
}

impl ColumnObservations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single value for a column
    pub fn observe(&mut self, name: &str, value: &ScalarValue) {
        let observed = classify(value);
        self.values += 1;
        self.record(name, observed, observed == PrimitiveType::Null);
    }

    /// Record every value of a row
    pub fn observe_row(&mut self, row: &Row) {
        self.rows += 1;
        for (name, value) in row.iter() {
            self.observe(name, value);
        }
    }

    /// Record every row of a batch
    pub fn observe_rows(&mut self, rows: &[Row]) {
        for row in rows {
            self.observe_row(row);
        }
    }

    fn record(&mut self, name: &str, field_type: PrimitiveType, saw_null: bool) {
        match self.index.get(name) {
            Some(&pos) => {
                let column = &mut self.columns[pos];
                column.field_type = merge_types(column.field_type, field_type);
                if saw_null {
                    column.nullable = true;
                }
            }
            None => {
                self.index.insert(name.to_string(), self.columns.len());
                self.columns.push(ObservedColumn {
                    name: name.to_string(),
                    field_type,
                    nullable: saw_null,
                });
            }
        }
    }

    /// Merge observations gathered after `self` in scan order
    pub fn merge(mut self, other: ColumnObservations) -> ColumnObservations {
        self.rows += other.rows;
        self.values += other.values;
        for column in other.columns {
            self.record(&column.name, column.field_type, column.nullable);
        }
        self
    }

    /// Number of distinct columns seen
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Rows recorded so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Values recorded so far
    pub fn values(&self) -> usize {
        self.values
    }

    /// Turn the observations into schema fields
    pub fn into_fields(self, assume_nullable: bool) -> Vec<Field> {
        self.columns
            .into_iter()
            .map(|c| Field::new(c.name, c.field_type, c.nullable || assume_nullable))
            .collect()
    }
}

/// Schema inference engine
///
/// Folds a sequence of chunks into one [`Schema`]. A native column catalog
/// anywhere in the input takes precedence over all row chunks.
#[derive(Debug, Clone, Default)]
pub struct SchemaInferrer {
    config: InferenceConfig,
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default configuration
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create a new schema inferrer with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer a schema from a sequence of chunks
    pub fn infer(&self, chunks: &[Chunk]) -> Result<Schema, InferenceError> {
        self.infer_with_stats(chunks).map(|(schema, _)| schema)
    }

    /// Infer a schema and report what the pass did
    pub fn infer_with_stats(
        &self,
        chunks: &[Chunk],
    ) -> Result<(Schema, InferenceStats), InferenceError> {
        if let Some(catalog) = first_catalog(chunks) {
            return self.infer_from_catalog(catalog, chunks.len());
        }

        let mut observations = ColumnObservations::new();
        let mut stats = InferenceStats::default();

        for chunk in chunks {
            match chunk {
                Chunk::Rows(rows) if !rows.is_empty() => {
                    observations.observe_rows(rows);
                    stats.chunks_scanned += 1;
                }
                _ => stats.chunks_skipped += 1,
            }
        }

        Ok(self.finish(observations, stats))
    }

    /// Infer a schema, scanning row chunks in parallel
    ///
    /// Produces the same schema as [`SchemaInferrer::infer`].
    #[cfg(feature = "parallel")]
    pub fn infer_parallel(&self, chunks: &[Chunk]) -> Result<Schema, InferenceError> {
        self.infer_parallel_with_stats(chunks)
            .map(|(schema, _)| schema)
    }

    /// Parallel counterpart of [`SchemaInferrer::infer_with_stats`]
    #[cfg(feature = "parallel")]
    pub fn infer_parallel_with_stats(
        &self,
        chunks: &[Chunk],
    ) -> Result<(Schema, InferenceStats), InferenceError> {
        use rayon::prelude::*;

        if let Some(catalog) = first_catalog(chunks) {
            return self.infer_from_catalog(catalog, chunks.len());
        }

        let observations = chunks
            .par_iter()
            .map(|chunk| {
                let mut shard = ColumnObservations::new();
                if let Chunk::Rows(rows) = chunk {
                    shard.observe_rows(rows);
                }
                shard
            })
            .reduce(ColumnObservations::new, ColumnObservations::merge);

        let stats = InferenceStats {
            chunks_scanned: chunks.iter().filter(|c| !c.is_empty()).count(),
            chunks_skipped: chunks.iter().filter(|c| c.is_empty()).count(),
            ..InferenceStats::default()
        };

        Ok(self.finish(observations, stats))
    }

    fn finish(
        &self,
        observations: ColumnObservations,
        mut stats: InferenceStats,
    ) -> (Schema, InferenceStats) {
        stats.source = SchemaSource::RowRecords;
        stats.rows_scanned = observations.rows();
        stats.values_observed = observations.values();

        let fields = observations.into_fields(self.config.assume_nullable);
        stats.fields_discovered = fields.len();

        tracing::debug!(
            rows = stats.rows_scanned,
            fields = stats.fields_discovered,
            skipped_chunks = stats.chunks_skipped,
            "Inferred schema from row records"
        );

        (Schema::new(self.config.schema_name.clone(), fields), stats)
    }

    fn infer_from_catalog(
        &self,
        catalog: &dyn ColumnCatalog,
        total_chunks: usize,
    ) -> Result<(Schema, InferenceStats), InferenceError> {
        let columns = catalog.columns()?;

        let mut fields: Vec<Field> = Vec::with_capacity(columns.len());
        for column in columns {
            if fields.iter().any(|f| f.name == column.name) {
                return Err(InferenceError::DuplicateCatalogColumn(column.name));
            }
            let field_type = native_type_to_simple(&column.native_type);
            let nullable = column.nullable || self.config.assume_nullable;
            fields.push(Field::new(column.name, field_type, nullable));
        }

        let ignored = total_chunks.saturating_sub(1);
        if ignored > 0 {
            tracing::warn!(
                ignored_chunks = ignored,
                "Native column catalog found; ignoring remaining chunks"
            );
        }

        let stats = InferenceStats {
            source: SchemaSource::Catalog,
            chunks_scanned: 1,
            chunks_skipped: ignored,
            rows_scanned: 0,
            values_observed: 0,
            fields_discovered: fields.len(),
        };

        tracing::debug!(fields = stats.fields_discovered, "Inferred schema from native catalog");

        Ok((Schema::new(self.config.schema_name.clone(), fields), stats))
    }
}

fn first_catalog(chunks: &[Chunk]) -> Option<&dyn ColumnCatalog> {
    chunks.iter().find_map(|chunk| match chunk {
        Chunk::Catalog(catalog) => Some(catalog.as_ref()),
        Chunk::Rows(_) => None,
    })
}

/// Infer a schema with the default configuration
pub fn infer(chunks: &[Chunk]) -> Result<Schema, InferenceError> {
    SchemaInferrer::new().infer(chunks)
}
