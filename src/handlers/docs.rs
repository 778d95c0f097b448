//! Serves the resolved request-body schemas for the documented operations.

use crate::schema::{ApiParser, EntityKind, Group, SchemaQuery};
use axum::Json;
use serde_json::{Map, Value};

const SECTIONS: &[(&str, EntityKind, Group)] = &[
    ("list_create", EntityKind::List, Group::ListCreate),
    ("list_update", EntityKind::List, Group::ListUpdate),
    ("item_create", EntityKind::Item, Group::ItemCreate),
    ("item_update", EntityKind::Item, Group::ItemUpdate),
];

/// GET /doc — one schema per operation.
pub async fn doc() -> Json<Value> {
    let parser = ApiParser::new();
    let mut out = Map::new();
    for (name, entity, group) in SECTIONS {
        let query = SchemaQuery {
            entity: *entity,
            groups: vec![*group],
            parsers: vec![ApiParser::NAME],
        };
        if !parser.supports(&query) {
            continue;
        }
        let schema = parser.parse(&query);
        out.insert(
            name.to_string(),
            serde_json::to_value(schema).unwrap_or(Value::Null),
        );
    }
    Json(Value::Object(out))
}
