//! Core types for schema inference

use std::fmt;
use std::str::FromStr;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};

/// Primitive type universe for inferred fields
///
/// Declaration order matches the widening precedence
/// `null < boolean < int64 < float64 < string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// Only nulls (or empty text) observed
    #[serde(rename = "null")]
    Null,
    /// Boolean values
    #[serde(rename = "boolean")]
    Boolean,
    /// Whole numbers
    #[serde(rename = "int64")]
    Int64,
    /// Floating point numbers
    #[serde(rename = "float64")]
    Float64,
    /// Text, and the fallback for anything else
    #[serde(rename = "string")]
    String,
}

impl PrimitiveType {
    /// All types, lowest precedence first
    pub const ALL: [PrimitiveType; 5] = [
        PrimitiveType::Null,
        PrimitiveType::Boolean,
        PrimitiveType::Int64,
        PrimitiveType::Float64,
        PrimitiveType::String,
    ];

    /// Get the wire name used in the output document
    pub fn type_name(&self) -> &'static str {
        match self {
            PrimitiveType::Null => "null",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::Float64 => "float64",
            PrimitiveType::String => "string",
        }
    }

    /// Merge this type with another type
    pub fn merge_with(self, other: PrimitiveType) -> PrimitiveType {
        super::merge::merge_types(self, other)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for PrimitiveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(PrimitiveType::Null),
            "boolean" => Ok(PrimitiveType::Boolean),
            "int64" => Ok(PrimitiveType::Int64),
            "float64" => Ok(PrimitiveType::Float64),
            "string" => Ok(PrimitiveType::String),
            _ => Err(format!(
                "Invalid primitive type: {}. Expected: null, boolean, int64, float64, string",
                s
            )),
        }
    }
}

/// A single scalar leaf value handed over by a reader
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for ScalarValue {
    fn from(v: bool) -> Self {
        ScalarValue::Bool(v)
    }
}

impl From<i64> for ScalarValue {
    fn from(v: i64) -> Self {
        ScalarValue::Int(v)
    }
}

impl From<i32> for ScalarValue {
    fn from(v: i32) -> Self {
        ScalarValue::Int(i64::from(v))
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Float(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        ScalarValue::Text(v.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(v: String) -> Self {
        ScalarValue::Text(v)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ScalarValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for ScalarValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => ScalarValue::Null,
            Value::Bool(b) => ScalarValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ScalarValue::Int(i)
                } else if n.is_u64() {
                    // Out of i64 range; keep the digits so it still reads as int64
                    ScalarValue::Text(n.to_string())
                } else {
                    n.as_f64()
                        .map_or_else(|| ScalarValue::Text(n.to_string()), ScalarValue::Float)
                }
            }
            Value::String(s) => ScalarValue::Text(s),
            // Nested values are not modelled
            nested @ (Value::Array(_) | Value::Object(_)) => ScalarValue::Text(nested.to_string()),
        }
    }
}

/// One observation unit: column name to scalar value, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<(String, ScalarValue)>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from pairs whose names are already distinct
    ///
    /// Skips the duplicate check done by [`Row::insert`]; readers that have
    /// already resolved repeated names use this to build rows in linear time.
    pub fn from_distinct(values: Vec<(String, ScalarValue)>) -> Self {
        Self { values }
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value, replacing any existing value for `name` in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ScalarValue>) {
        let name = name.into();
        let value = value.into();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
    }

    /// Look up a value by column name
    pub fn get(&self, name: &str) -> Option<&ScalarValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<ScalarValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (name, value) in iter {
            row.insert(name, value);
        }
        row
    }
}

/// A field in an inferred schema
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name, unique within its schema
    pub name: String,
    /// Resolved type
    pub field_type: PrimitiveType,
    /// Whether a null was observed or declared
    pub nullable: bool,
    /// Default value (never populated by inference)
    pub default: Option<serde_json::Value>,
}

impl Field {
    /// Create a new field
    pub fn new(name: impl Into<String>, field_type: PrimitiveType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable,
            default: None,
        }
    }

    /// Attach a default value
    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Serializes as `{"name": .., "type": T | ["null", T], "default"?: ..}`
impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.default.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("name", &self.name)?;
        if self.nullable {
            map.serialize_entry("type", &[PrimitiveType::Null, self.field_type])?;
        } else {
            map.serialize_entry("type", &self.field_type)?;
        }
        if let Some(ref default) = self.default {
            map.serialize_entry("default", default)?;
        }
        map.end()
    }
}

/// An inferred record schema
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Schema name
    pub name: String,
    /// Fields in first-seen order
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a schema from its parts
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in schema order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert to the record-style JSON document
    pub fn to_json(&self) -> serde_json::Value {
        // Serializing plain strings, enums and JSON values into a Value cannot fail
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Schema", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("type", "record")?;
        state.serialize_field("fields", &self.fields)?;
        state.end()
    }
}
