//! Structural Comparator
//!
//! Deep, recursive value comparison used by form/state-diffing callers to
//! decide whether edited data is dirty. Reference identity is only a
//! fast-path shortcut; the truth value depends on structural content alone.
//!
//! The comparison is deliberately asymmetric: keys present only in the
//! second argument are never visited individually, they are caught by the
//! key-count check alone. Dependents treat the second argument as a
//! superset-tolerant patch, so this behavior must not be strengthened.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A value the comparator understands: a primitive, an ordered sequence,
/// or a string-keyed mapping. No identity beyond structural content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparableValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Sequence(Vec<ComparableValue>),
    Mapping(BTreeMap<String, ComparableValue>),
}

impl From<serde_json::Value> for ComparableValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ComparableValue::Null,
            serde_json::Value::Bool(b) => ComparableValue::Bool(b),
            serde_json::Value::Number(n) => {
                ComparableValue::Number(n.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(s) => ComparableValue::Text(s),
            serde_json::Value::Array(items) => {
                ComparableValue::Sequence(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => ComparableValue::Mapping(
                entries.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

/// Deep structural equality between two values.
///
/// - Same reference: true without descending.
/// - Either side null: false.
/// - Primitives: equal by value, never coerced across variants.
/// - Composites: equal key counts, then every key of `old` must exist in
///   `new` with a structurally equal value. Sequences compare positionally
///   (index as key), so `[1,2]` and `[2,1]` are unequal.
///
/// Owned values are acyclic by construction, so recursion depth is bounded
/// by input depth and no cycle guard is needed.
// TODO: unordered sequence comparison is not implemented; compares positionally only.
pub fn structural_equal(old: &ComparableValue, new: &ComparableValue) -> bool {
    if std::ptr::eq(old, new) {
        return true;
    }

    use ComparableValue::*;
    match (old, new) {
        (Null, _) | (_, Null) => false,
        (Bool(a), Bool(b)) => a == b,
        (Number(a), Number(b)) => a == b,
        (Text(a), Text(b)) => a == b,
        (Sequence(a), Sequence(b)) => {
            if a.len() != b.len() {
                return false;
            }
            a.iter().zip(b.iter()).all(|(x, y)| structural_equal(x, y))
        }
        (Mapping(a), Mapping(b)) => {
            if a.len() != b.len() {
                return false;
            }
            // Extra keys in `new` are only caught by the count check above.
            a.iter().all(|(key, value)| match b.get(key) {
                Some(other) => structural_equal(value, other),
                None => false,
            })
        }
        // Mixed categories (primitive vs composite, sequence vs mapping)
        _ => false,
    }
}
