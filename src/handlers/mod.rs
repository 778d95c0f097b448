//! HTTP handlers: thin orchestration over validation, the entity
//! utilities, and the services.

pub mod docs;
pub mod items;
pub mod lists;

use crate::error::AppError;
use serde_json::{Map, Value};

pub(crate) fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}
