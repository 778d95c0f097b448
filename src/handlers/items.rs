//! List-item endpoints.

use super::body_to_map;
use crate::entity::{Patchable, ToPayload};
use crate::error::AppError;
use crate::response;
use crate::schema::{rules, EntityKind};
use crate::service::{ItemService, ListService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use serde_json::Value;

/// GET /list/item/{id} — 200 with the item, 204 when absent.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match ItemService::fetch(&state.pool, id).await? {
        Some(item) => Ok(response::entity(item.to_payload(true))),
        None => Ok(response::absent()),
    }
}

/// POST /list/{id}/item — create an item under an existing list.
pub async fn create_item(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let body = body_to_map(body)?;
    rules::validate(EntityKind::Item, &body)?;
    let Some(entry) = body.get("entry").and_then(Value::as_str) else {
        return Err(AppError::Validation("'entry' - required.".into()));
    };
    if !ListService::exists(&state.pool, list_id).await? {
        return Err(AppError::BadRequest(format!("list {} not found", list_id)));
    }
    let item = ItemService::create(&state.pool, list_id, entry).await?;
    Ok(response::entity(item.to_payload(true)))
}

/// PUT /list/item/{id} — partial update. 204 when the item is absent.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let body = body_to_map(body)?;
    rules::validate_partial(EntityKind::Item, &body)?;

    let Some(mut item) = ItemService::fetch(&state.pool, id).await? else {
        return Ok(response::absent());
    };
    item.apply(&body);
    ItemService::save(&state.pool, &item).await?;
    Ok(response::entity(item.to_payload(true)))
}

/// DELETE /list/item/{id} — 204.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    ItemService::delete(&state.pool, id).await?;
    Ok(response::deleted())
}
