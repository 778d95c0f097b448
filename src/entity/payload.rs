//! Explicit per-type serialization to a JSON payload.
//!
//! Each entity enumerates its own fields; scalars pass through unchanged,
//! owned collections become ordered arrays of nested payloads, and `None`
//! fields are omitted when `ignore_null` is set (the default handlers use).

use serde_json::{Map, Value};

pub trait ToPayload {
    fn to_payload(&self, ignore_null: bool) -> Map<String, Value>;
}
