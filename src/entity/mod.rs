//! Entity model: typed records plus the partial-update and payload
//! serialization mechanisms.

mod item;
mod list;
mod patch;
mod payload;

pub use item::ListItem;
pub use list::List;
pub use patch::Patchable;
pub use payload::ToPayload;
