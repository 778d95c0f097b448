//! Request-body schema resolution: a metadata source describes each
//! entity's fields per group, a rules source overlays required/format, and
//! the parser resolves nested object schemas recursively.

mod metadata;
mod parser;
pub mod rules;

pub use metadata::MetadataParser;
pub use parser::ApiParser;
pub use rules::RulesParser;

use serde::Serialize;
use std::collections::BTreeMap;

/// Entity types the schema sources know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    List,
    Item,
}

/// Tag selecting which fields of an entity are relevant to an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    ListCreate,
    ListUpdate,
    ItemCreate,
    ItemUpdate,
}

/// Descriptor handed to the parser: which entity, for which groups, and
/// which parsers the caller expects to run.
#[derive(Clone, Debug)]
pub struct SchemaQuery {
    pub entity: EntityKind,
    pub groups: Vec<Group>,
    pub parsers: Vec<&'static str>,
}

/// One resolved field of a request-body schema.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldSchema {
    pub data_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    /// Entity behind an object-valued field, if any.
    #[serde(skip)]
    pub nested: Option<EntityKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<BTreeMap<String, FieldSchema>>,
}
