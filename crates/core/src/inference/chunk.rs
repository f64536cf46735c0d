//! Input units handed to the inference engine

use std::fmt;

use super::native::ColumnCatalog;
use super::types::Row;

/// One bounded batch of sampled input
pub enum Chunk {
    /// Row records to classify value by value
    Rows(Vec<Row>),
    /// Pre-typed column metadata, trusted as-is
    Catalog(Box<dyn ColumnCatalog>),
}

impl Chunk {
    /// Wrap any catalog as a chunk
    pub fn catalog<C: ColumnCatalog + 'static>(catalog: C) -> Self {
        Chunk::Catalog(Box::new(catalog))
    }

    pub fn is_catalog(&self) -> bool {
        matches!(self, Chunk::Catalog(_))
    }

    /// True for a row chunk with no rows
    pub fn is_empty(&self) -> bool {
        match self {
            Chunk::Rows(rows) => rows.is_empty(),
            Chunk::Catalog(_) => false,
        }
    }
}

impl From<Vec<Row>> for Chunk {
    fn from(rows: Vec<Row>) -> Self {
        Chunk::Rows(rows)
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chunk::Rows(rows) => f.debug_tuple("Rows").field(&rows.len()).finish(),
            Chunk::Catalog(_) => f.write_str("Catalog(..)"),
        }
    }
}
