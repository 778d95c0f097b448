//! Partial update via a closed per-entity dispatch table.
//!
//! Only fields present in the payload are applied; everything else keeps
//! its prior value. Unknown field names, immutable fields, and values of
//! the wrong JSON type are silent no-ops.

use serde_json::{Map, Value};

pub trait Patchable {
    /// Apply one field by name. Returns true if the field was applied.
    fn apply_field(&mut self, name: &str, value: &Value) -> bool;

    /// Apply every recognized field in the payload. Returns the number of
    /// fields applied. Map iteration order is not meaningful.
    fn apply(&mut self, fields: &Map<String, Value>) -> usize {
        fields
            .iter()
            .filter(|(name, value)| self.apply_field(name, value))
            .count()
    }
}

/// A positive-integer id from a payload value; accepts numbers and digit
/// strings, rejects everything else.
pub(crate) fn positive_id(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    (id > 0).then_some(id)
}
