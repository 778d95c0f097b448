//! Typed CRUD execution against PostgreSQL.

mod items;
mod lists;

pub use items::ItemService;
pub use lists::ListService;
