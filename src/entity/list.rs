//! A list and its owned items.

use super::item::ListItem;
use super::patch::{positive_id, Patchable};
use super::payload::ToPayload;
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct List {
    /// Store-generated; None until the row is inserted.
    pub id: Option<i64>,
    pub name: String,
    /// Ordered, owned collection. Deleting the list cascades to these rows.
    pub items: Vec<ListItem>,
}

impl List {
    pub fn new(name: impl Into<String>) -> Self {
        List {
            id: None,
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, mut item: ListItem) {
        item.list_id = self.id;
        self.items.push(item);
    }

    /// Stamp every owned item's back-reference with this list's id. Called
    /// after the list row exists and before item rows are written, keeping
    /// both sides of the relation consistent.
    pub fn adopt_items(&mut self) {
        for item in &mut self.items {
            item.list_id = self.id;
        }
    }

    /// Merge an `items` payload into the owned collection: each element
    /// carrying a positive-integer `id` that matches an owned item is
    /// patched in place; everything else is skipped.
    fn update_items(&mut self, value: &Value) -> bool {
        let Some(elements) = value.as_array() else {
            return false;
        };
        let by_id: HashMap<i64, usize> = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| item.id.map(|id| (id, idx)))
            .collect();
        let mut touched = false;
        for element in elements {
            let Some(fields) = element.as_object() else {
                continue;
            };
            let Some(id) = fields.get("id").and_then(positive_id) else {
                continue;
            };
            if let Some(&idx) = by_id.get(&id) {
                self.items[idx].apply(fields);
                touched = true;
            }
        }
        touched
    }
}

impl Patchable for List {
    // id is immutable from payloads.
    fn apply_field(&mut self, name: &str, value: &Value) -> bool {
        match name {
            "name" => match value.as_str() {
                Some(s) => {
                    self.name = s.to_owned();
                    true
                }
                None => false,
            },
            "items" => self.update_items(value),
            _ => false,
        }
    }
}

impl ToPayload for List {
    fn to_payload(&self, ignore_null: bool) -> Map<String, Value> {
        let mut out = Map::new();
        match self.id {
            Some(id) => {
                out.insert("id".into(), Value::Number(id.into()));
            }
            None if !ignore_null => {
                out.insert("id".into(), Value::Null);
            }
            None => {}
        }
        out.insert("name".into(), Value::String(self.name.clone()));
        let items = self
            .items
            .iter()
            .map(|item| Value::Object(item.to_payload(ignore_null)))
            .collect();
        out.insert("items".into(), Value::Array(items));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn saved_list() -> List {
        List {
            id: Some(7),
            name: "groceries".into(),
            items: vec![
                ListItem {
                    id: Some(1),
                    list_id: Some(7),
                    entry: "milk".into(),
                },
                ListItem {
                    id: Some(2),
                    list_id: Some(7),
                    entry: "eggs".into(),
                },
            ],
        }
    }

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn adopt_items_sets_every_back_reference() {
        let mut list = List::new("chores");
        list.id = Some(11);
        list.items = vec![ListItem::new("sweep"), ListItem::new("dust"), ListItem::new("mop")];
        list.adopt_items();
        assert!(list.items.iter().all(|i| i.list_id == Some(11)));
    }

    #[test]
    fn patch_renames_and_leaves_items_alone() {
        let mut list = saved_list();
        let applied = list.apply(&fields(json!({ "name": "errands" })));
        assert_eq!(applied, 1);
        assert_eq!(list.name, "errands");
        assert_eq!(list.items[0].entry, "milk");
    }

    #[test]
    fn patch_merges_items_by_id() {
        let mut list = saved_list();
        list.apply(&fields(json!({
            "items": [
                { "id": 2, "entry": "bread" },
                { "id": 999, "entry": "ghost" },
                { "entry": "no id, skipped" },
                { "id": -1, "entry": "bad id, skipped" }
            ]
        })));
        assert_eq!(list.items[0].entry, "milk");
        assert_eq!(list.items[1].entry, "bread");
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn unknown_fields_are_no_ops() {
        let mut list = saved_list();
        let before = list.clone();
        let applied = list.apply(&fields(json!({ "owner": "nobody", "id": 99 })));
        assert_eq!(applied, 0);
        assert_eq!(list, before);
    }

    #[test]
    fn payload_serializes_items_in_order() {
        let list = saved_list();
        let out = list.to_payload(true);
        assert_eq!(out.get("id"), Some(&json!(7)));
        assert_eq!(out.get("name"), Some(&json!("groceries")));
        let items = out.get("items").and_then(Value::as_array).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("id"), Some(&json!(1)));
        assert_eq!(items[0].get("entry"), Some(&json!("milk")));
        assert_eq!(items[1].get("id"), Some(&json!(2)));
        assert_eq!(items[1].get("entry"), Some(&json!("eggs")));
    }

    #[test]
    fn payload_omits_null_id_before_persist() {
        let list = List::new("fresh");
        let out = list.to_payload(true);
        assert!(!out.contains_key("id"));
        assert_eq!(out.get("items"), Some(&json!([])));
    }
}
