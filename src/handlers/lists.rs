//! List endpoints.

use super::body_to_map;
use crate::entity::{List, ListItem, Patchable, ToPayload};
use crate::error::AppError;
use crate::response;
use crate::schema::{rules, EntityKind};
use crate::service::ListService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use serde_json::Value;

/// GET /list/{id} — 200 with the list, 204 when absent.
pub async fn get_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match ListService::fetch(&state.pool, id).await? {
        Some(list) => Ok(response::entity(list.to_payload(true))),
        None => Ok(response::absent()),
    }
}

/// POST /list — create a list, optionally with initial items.
pub async fn create_list(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let body = body_to_map(body)?;

    let mut errors = rules::violations(EntityKind::List, &body, false);
    let mut items = Vec::new();
    if let Some(elements) = body.get("items").and_then(Value::as_array) {
        for element in elements {
            match element.as_object() {
                Some(fields) => {
                    errors.extend(rules::violations(EntityKind::Item, fields, false));
                    if let Some(entry) = fields.get("entry").and_then(Value::as_str) {
                        items.push(ListItem::new(entry));
                    }
                }
                None => errors.push("'items' - each element must be an object.".into()),
            }
        }
    }
    rules::collect(errors)?;

    // Validation guarantees a non-blank name.
    let name = body.get("name").and_then(Value::as_str).unwrap_or_default();
    let mut list = List::new(name);
    list.items = items;

    let created = ListService::create(&state.pool, list).await?;
    Ok(response::entity(created.to_payload(true)))
}

/// PUT /list/{id} — partial update; only fields present in the payload are
/// applied. 204 when the list is absent.
pub async fn update_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let body = body_to_map(body)?;
    rules::validate_partial(EntityKind::List, &body)?;

    let Some(mut list) = ListService::fetch(&state.pool, id).await? else {
        return Ok(response::absent());
    };
    list.apply(&body);
    ListService::save(&state.pool, &list).await?;
    Ok(response::entity(list.to_payload(true)))
}

/// DELETE /list/{id} — 204; owned items go with the list.
pub async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    ListService::delete(&state.pool, id).await?;
    Ok(response::deleted())
}
