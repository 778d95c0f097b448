//! A single entry owned by a list.

use super::patch::Patchable;
use super::payload::ToPayload;
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct ListItem {
    /// Store-generated; None until the row is inserted.
    pub id: Option<i64>,
    /// Back-reference to the owning list. A lookup relation: the list owns
    /// the item, not the reverse.
    pub list_id: Option<i64>,
    pub entry: String,
}

impl ListItem {
    pub fn new(entry: impl Into<String>) -> Self {
        ListItem {
            id: None,
            list_id: None,
            entry: entry.into(),
        }
    }
}

impl Patchable for ListItem {
    // id and list_id are immutable from payloads.
    fn apply_field(&mut self, name: &str, value: &Value) -> bool {
        match name {
            "entry" => match value.as_str() {
                Some(s) => {
                    self.entry = s.to_owned();
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}

impl ToPayload for ListItem {
    fn to_payload(&self, ignore_null: bool) -> Map<String, Value> {
        let mut out = Map::new();
        push_opt(&mut out, "id", self.id, ignore_null);
        push_opt(&mut out, "list_id", self.list_id, ignore_null);
        out.insert("entry".into(), Value::String(self.entry.clone()));
        out
    }
}

fn push_opt(out: &mut Map<String, Value>, name: &str, v: Option<i64>, ignore_null: bool) {
    match v {
        Some(n) => {
            out.insert(name.into(), Value::Number(n.into()));
        }
        None if !ignore_null => {
            out.insert(name.into(), Value::Null);
        }
        None => {}
    }
}
