//! Per-value type classification

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{PrimitiveType, ScalarValue};

// Optional single sign followed by ASCII digits
static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

/// Classify a single value
///
/// Total over [`ScalarValue`]: every value maps to one of the five primitive
/// types, with [`PrimitiveType::String`] as the catch-all.
pub fn classify(value: &ScalarValue) -> PrimitiveType {
    match value {
        ScalarValue::Null => PrimitiveType::Null,
        ScalarValue::Bool(_) => PrimitiveType::Boolean,
        ScalarValue::Int(_) => PrimitiveType::Int64,
        ScalarValue::Float(_) => PrimitiveType::Float64,
        ScalarValue::Text(s) => classify_text(s),
    }
}

/// Classify untyped text (e.g. a CSV cell)
pub fn classify_text(text: &str) -> PrimitiveType {
    let s = text.trim();
    if s.is_empty() {
        return PrimitiveType::Null;
    }
    if INTEGER_REGEX.is_match(s) {
        return PrimitiveType::Int64;
    }
    if s.parse::<f64>().is_ok() {
        return PrimitiveType::Float64;
    }
    PrimitiveType::String
}
