//! Structural helpers over JSON records

use serde_json::{Map, Value};

/// Shallow copy of `record` without `keys`.
///
/// Every other entry is carried over unchanged; nested values are cloned
/// as-is, not traversed.
pub fn omit(record: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    record
        .iter()
        .filter(|(k, _)| !keys.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
