//! Listkeeper: list/list-item REST backend library.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;

pub use entity::{List, ListItem, Patchable, ToPayload};
pub use error::AppError;
pub use migration::{apply_migrations, ensure_database_exists};
pub use routes::{api_routes, common_routes, common_routes_with_ready};
pub use schema::{ApiParser, EntityKind, FieldSchema, Group, SchemaQuery};
pub use service::{ItemService, ListService};
pub use state::AppState;
