//! Response helpers: entity payloads and empty successes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

/// 200 with the entity payload as the body.
pub fn entity(payload: Map<String, Value>) -> Response {
    (StatusCode::OK, Json(Value::Object(payload))).into_response()
}

/// 204 for an absent entity (absence is a success, not an error).
pub fn absent() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// 204 after a delete.
pub fn deleted() -> Response {
    StatusCode::NO_CONTENT.into_response()
}
