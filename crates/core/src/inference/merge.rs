//! Type merging utilities
//!
//! Provides the join operator of the primitive type lattice and the
//! reduction used to combine per-shard column observations into one.

use super::inferrer::ColumnObservations;
use super::types::PrimitiveType;

/// Merge two primitive types
///
/// Decision table, highest priority wins:
/// - either is `string` -> `string`
/// - either is `float64` -> `float64`
/// - either is `int64` -> `int64`
/// - either is `boolean` -> `boolean`
/// - otherwise `null`
pub fn merge_types(a: PrimitiveType, b: PrimitiveType) -> PrimitiveType {
    use PrimitiveType::*;

    if a == b {
        return a;
    }
    if a == String || b == String {
        return String;
    }
    if a == Float64 || b == Float64 {
        return Float64;
    }
    if a == Int64 || b == Int64 {
        return Int64;
    }
    if a == Boolean || b == Boolean {
        return Boolean;
    }
    Null
}

/// Fold any number of observed types, starting from `null`
pub fn merge_all<I>(types: I) -> PrimitiveType
where
    I: IntoIterator<Item = PrimitiveType>,
{
    types.into_iter().fold(PrimitiveType::Null, merge_types)
}

/// Merge per-shard observations into a single accumulator
///
/// Shards must be given in scan order; columns keep the order in which they
/// were first seen across the whole sequence.
pub fn merge_observations(shards: Vec<ColumnObservations>) -> ColumnObservations {
    shards
        .into_iter()
        .reduce(ColumnObservations::merge)
        .unwrap_or_default()
}
