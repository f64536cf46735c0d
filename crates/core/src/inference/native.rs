//! Native column types and column catalogs
//!
//! Columnar sources carry their own type metadata. A [`ColumnCatalog`]
//! exposes it as a list of [`CatalogColumn`]s, and [`native_type_to_simple`]
//! maps each native tag onto the primitive type universe.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InferenceError;
use super::types::PrimitiveType;

/// Native column type tag of a source format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NativeType {
    Null,
    Boolean,
    /// Integer of any width
    Integer { bits: u8, signed: bool },
    /// Floating point of any width
    Float { bits: u8 },
    /// Fixed-point decimal
    Decimal { precision: u8, scale: i8 },
    /// UTF-8 text of any offset width
    Utf8,
    /// Raw bytes
    Binary,
    Timestamp,
    Date,
    Time,
    Duration,
    List,
    Struct,
    Map,
    Union,
    /// Unrecognized tag, kept verbatim
    Other(String),
}

impl NativeType {
    /// Signed integer of the given width
    pub fn int(bits: u8) -> Self {
        NativeType::Integer { bits, signed: true }
    }

    /// Unsigned integer of the given width
    pub fn uint(bits: u8) -> Self {
        NativeType::Integer {
            bits,
            signed: false,
        }
    }

    pub fn decimal(precision: u8, scale: i8) -> Self {
        NativeType::Decimal { precision, scale }
    }

    /// Map this native type onto the primitive type universe
    pub fn to_simple(&self) -> PrimitiveType {
        native_type_to_simple(self)
    }
}

/// Map a native column type to a primitive type
///
/// Temporal values are kept in their textual form and nested or unrecognized
/// types fall back to `string`.
pub fn native_type_to_simple(native: &NativeType) -> PrimitiveType {
    match native {
        NativeType::Null => PrimitiveType::Null,
        NativeType::Boolean => PrimitiveType::Boolean,
        NativeType::Integer { .. } => PrimitiveType::Int64,
        NativeType::Float { .. } | NativeType::Decimal { .. } => PrimitiveType::Float64,
        NativeType::Utf8 | NativeType::Binary => PrimitiveType::String,
        NativeType::Timestamp | NativeType::Date | NativeType::Time | NativeType::Duration => {
            PrimitiveType::String
        }
        NativeType::List
        | NativeType::Struct
        | NativeType::Map
        | NativeType::Union
        | NativeType::Other(_) => PrimitiveType::String,
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeType::Null => write!(f, "null"),
            NativeType::Boolean => write!(f, "bool"),
            NativeType::Integer { bits, signed: true } => write!(f, "int{}", bits),
            NativeType::Integer {
                bits,
                signed: false,
            } => write!(f, "uint{}", bits),
            NativeType::Float { bits } => write!(f, "float{}", bits),
            NativeType::Decimal { precision, scale } => {
                write!(f, "decimal({}, {})", precision, scale)
            }
            NativeType::Utf8 => write!(f, "string"),
            NativeType::Binary => write!(f, "binary"),
            NativeType::Timestamp => write!(f, "timestamp"),
            NativeType::Date => write!(f, "date"),
            NativeType::Time => write!(f, "time"),
            NativeType::Duration => write!(f, "duration"),
            NativeType::List => write!(f, "list"),
            NativeType::Struct => write!(f, "struct"),
            NativeType::Map => write!(f, "map"),
            NativeType::Union => write!(f, "union"),
            NativeType::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// Parses loose textual type tags such as `int32`, `double`, `decimal(10,2)`,
/// `timestamp[ms]` or `list<int64>`. Never fails: unknown tags become
/// [`NativeType::Other`].
impl FromStr for NativeType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        // Parameters such as `(10,2)`, `[ms, tz=UTC]` or `<item>` follow the base name
        let base = tag
            .split(['(', '[', '<'])
            .next()
            .unwrap_or_default()
            .trim();

        let native = match base {
            "null" | "na" => NativeType::Null,
            "bool" | "boolean" => NativeType::Boolean,
            "int8" | "tinyint" => NativeType::int(8),
            "int16" | "smallint" => NativeType::int(16),
            "int32" | "int" | "integer" => NativeType::int(32),
            "int64" | "bigint" | "long" => NativeType::int(64),
            "uint8" => NativeType::uint(8),
            "uint16" => NativeType::uint(16),
            "uint32" => NativeType::uint(32),
            "uint64" => NativeType::uint(64),
            "float16" | "halffloat" => NativeType::Float { bits: 16 },
            "float32" | "float" | "real" => NativeType::Float { bits: 32 },
            "float64" | "double" => NativeType::Float { bits: 64 },
            "decimal" | "decimal128" | "decimal256" | "numeric" => parse_decimal(&tag),
            "string" | "utf8" | "large_string" | "large_utf8" | "string_view" | "utf8_view"
            | "text" | "varchar" => NativeType::Utf8,
            "binary" | "large_binary" | "binary_view" | "fixed_size_binary" | "bytes" => {
                NativeType::Binary
            }
            "timestamp" | "datetime" => NativeType::Timestamp,
            "date" | "date32" | "date64" => NativeType::Date,
            "time" | "time32" | "time64" => NativeType::Time,
            "duration" => NativeType::Duration,
            "list" | "large_list" | "fixed_size_list" | "list_view" | "array" => NativeType::List,
            "struct" => NativeType::Struct,
            "map" => NativeType::Map,
            "union" | "dense_union" | "sparse_union" => NativeType::Union,
            _ => NativeType::Other(s.trim().to_string()),
        };
        Ok(native)
    }
}

fn parse_decimal(tag: &str) -> NativeType {
    let params = tag
        .split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(inner, _)| inner);

    let (precision, scale) = match params {
        Some(inner) => {
            let mut parts = inner.split(',').map(str::trim);
            let precision = parts.next().and_then(|p| p.parse().ok()).unwrap_or(38);
            let scale = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
            (precision, scale)
        }
        None => (38, 0),
    };
    NativeType::decimal(precision, scale)
}

/// One column of a native catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogColumn {
    pub name: String,
    pub native_type: NativeType,
    pub nullable: bool,
}

impl CatalogColumn {
    pub fn new(name: impl Into<String>, native_type: NativeType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            native_type,
            nullable,
        }
    }
}

/// Pre-typed column metadata supplied by a columnar source
pub trait ColumnCatalog: Send + Sync {
    /// Expose the catalog's columns in declaration order
    ///
    /// Returns [`InferenceError::CatalogIntrospection`] when the metadata
    /// cannot be read.
    fn columns(&self) -> Result<Vec<CatalogColumn>, InferenceError>;
}

impl ColumnCatalog for Vec<CatalogColumn> {
    fn columns(&self) -> Result<Vec<CatalogColumn>, InferenceError> {
        Ok(self.clone())
    }
}

#[cfg(feature = "arrow")]
mod arrow_catalog {
    use arrow::datatypes::{DataType, Schema, SchemaRef};
    use arrow::record_batch::RecordBatch;

    use super::{CatalogColumn, ColumnCatalog, NativeType};
    use crate::inference::error::InferenceError;

    impl From<&DataType> for NativeType {
        fn from(data_type: &DataType) -> Self {
            match data_type {
                DataType::Null => NativeType::Null,
                DataType::Boolean => NativeType::Boolean,
                DataType::Int8 => NativeType::int(8),
                DataType::Int16 => NativeType::int(16),
                DataType::Int32 => NativeType::int(32),
                DataType::Int64 => NativeType::int(64),
                DataType::UInt8 => NativeType::uint(8),
                DataType::UInt16 => NativeType::uint(16),
                DataType::UInt32 => NativeType::uint(32),
                DataType::UInt64 => NativeType::uint(64),
                DataType::Float16 => NativeType::Float { bits: 16 },
                DataType::Float32 => NativeType::Float { bits: 32 },
                DataType::Float64 => NativeType::Float { bits: 64 },
                DataType::Decimal128(precision, scale) | DataType::Decimal256(precision, scale) => {
                    NativeType::decimal(*precision, *scale)
                }
                DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => NativeType::Utf8,
                DataType::Binary
                | DataType::LargeBinary
                | DataType::BinaryView
                | DataType::FixedSizeBinary(_) => NativeType::Binary,
                DataType::Timestamp(_, _) => NativeType::Timestamp,
                DataType::Date32 | DataType::Date64 => NativeType::Date,
                DataType::Time32(_) | DataType::Time64(_) => NativeType::Time,
                DataType::Duration(_) => NativeType::Duration,
                DataType::List(_)
                | DataType::LargeList(_)
                | DataType::FixedSizeList(_, _)
                | DataType::ListView(_)
                | DataType::LargeListView(_) => NativeType::List,
                DataType::Struct(_) => NativeType::Struct,
                DataType::Map(_, _) => NativeType::Map,
                DataType::Union(_, _) => NativeType::Union,
                other => NativeType::Other(other.to_string()),
            }
        }
    }

    impl ColumnCatalog for Schema {
        fn columns(&self) -> Result<Vec<CatalogColumn>, InferenceError> {
            Ok(self
                .fields()
                .iter()
                .map(|f| {
                    CatalogColumn::new(f.name(), NativeType::from(f.data_type()), f.is_nullable())
                })
                .collect())
        }
    }

    impl ColumnCatalog for SchemaRef {
        fn columns(&self) -> Result<Vec<CatalogColumn>, InferenceError> {
            self.as_ref().columns()
        }
    }

    impl ColumnCatalog for RecordBatch {
        fn columns(&self) -> Result<Vec<CatalogColumn>, InferenceError> {
            self.schema_ref().columns()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tag: &str) -> NativeType {
        tag.parse().unwrap()
    }

    #[test]
    fn test_native_integers_map_to_int64() {
        for tag in ["int8", "int16", "int32", "int64", "uint8", "uint64", "bigint"] {
            assert_eq!(parse(tag).to_simple(), PrimitiveType::Int64, "{tag}");
        }
    }

    #[test]
    fn test_native_floats_and_decimals_map_to_float64() {
        for tag in ["float16", "float", "double", "decimal(10,2)", "decimal128(38, 9)"] {
            assert_eq!(parse(tag).to_simple(), PrimitiveType::Float64, "{tag}");
        }
        assert_eq!(
            parse("decimal(10, 2)"),
            NativeType::Decimal {
                precision: 10,
                scale: 2
            }
        );
    }

    #[test]
    fn test_native_text_temporal_and_nested_map_to_string() {
        for tag in [
            "string",
            "large_string",
            "binary",
            "timestamp[ms, tz=UTC]",
            "date32[day]",
            "time64[us]",
            "duration[s]",
            "list<item: int64>",
            "struct<a: int32>",
            "map<string, int64>",
            "dense_union",
            "dictionary<values=string, indices=int32>",
        ] {
            assert_eq!(parse(tag).to_simple(), PrimitiveType::String, "{tag}");
        }
    }

    #[test]
    fn test_native_null_and_boolean() {
        assert_eq!(parse("null").to_simple(), PrimitiveType::Null);
        assert_eq!(parse("bool").to_simple(), PrimitiveType::Boolean);
        assert_eq!(parse("BOOLEAN").to_simple(), PrimitiveType::Boolean);
    }

    #[test]
    fn test_unknown_tag_is_kept() {
        assert_eq!(parse("geometry"), NativeType::Other("geometry".to_string()));
    }

    #[test]
    fn test_vec_catalog_columns() {
        let catalog = vec![
            CatalogColumn::new("a", NativeType::int(64), false),
            CatalogColumn::new("b", NativeType::Utf8, true),
        ];
        let columns = catalog.columns().unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[1].name, "b");
        assert!(columns[1].nullable);
    }

    #[cfg(feature = "arrow")]
    #[test]
    fn test_arrow_schema_catalog() {
        use arrow::datatypes::{DataType, Field, Schema, TimeUnit};

        let schema = Schema::new(vec![
            Field::new("id", DataType::Int32, false),
            Field::new("price", DataType::Decimal128(10, 2), true),
            Field::new("seen_at", DataType::Timestamp(TimeUnit::Millisecond, None), true),
            Field::new(
                "tags",
                DataType::List(std::sync::Arc::new(Field::new("item", DataType::Utf8, true))),
                true,
            ),
        ]);

        let simple: Vec<PrimitiveType> = schema
            .columns()
            .unwrap()
            .iter()
            .map(|c| c.native_type.to_simple())
            .collect();
        assert_eq!(
            simple,
            vec![
                PrimitiveType::Int64,
                PrimitiveType::Float64,
                PrimitiveType::String,
                PrimitiveType::String
            ]
        );
    }
}
