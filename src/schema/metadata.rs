//! Static field metadata per entity, filtered by group.

use super::{EntityKind, FieldSchema, Group};
use std::collections::BTreeMap;

struct FieldMeta {
    name: &'static str,
    data_type: &'static str,
    groups: &'static [Group],
    nested: Option<EntityKind>,
}

const LIST_FIELDS: &[FieldMeta] = &[
    FieldMeta {
        name: "id",
        data_type: "integer",
        groups: &[],
        nested: None,
    },
    FieldMeta {
        name: "name",
        data_type: "string",
        groups: &[Group::ListCreate, Group::ListUpdate],
        nested: None,
    },
    FieldMeta {
        name: "items",
        data_type: "array of objects",
        groups: &[Group::ListCreate, Group::ListUpdate],
        nested: Some(EntityKind::Item),
    },
];

const ITEM_FIELDS: &[FieldMeta] = &[
    FieldMeta {
        name: "id",
        data_type: "integer",
        groups: &[Group::ListUpdate],
        nested: None,
    },
    FieldMeta {
        name: "list",
        data_type: "object",
        groups: &[Group::ItemCreate],
        nested: Some(EntityKind::List),
    },
    FieldMeta {
        name: "entry",
        data_type: "string",
        groups: &[
            Group::ItemCreate,
            Group::ListCreate,
            Group::ListUpdate,
            Group::ItemUpdate,
        ],
        nested: None,
    },
];

fn fields_of(entity: EntityKind) -> &'static [FieldMeta] {
    match entity {
        EntityKind::List => LIST_FIELDS,
        EntityKind::Item => ITEM_FIELDS,
    }
}

pub struct MetadataParser;

impl MetadataParser {
    pub fn supports(&self, entity: EntityKind) -> bool {
        !fields_of(entity).is_empty()
    }

    /// Base field map for the entity, keeping only fields tagged with at
    /// least one of the requested groups.
    pub fn parse(&self, entity: EntityKind, groups: &[Group]) -> BTreeMap<String, FieldSchema> {
        fields_of(entity)
            .iter()
            .filter(|f| f.groups.iter().any(|g| groups.contains(g)))
            .map(|f| {
                (
                    f.name.to_string(),
                    FieldSchema {
                        data_type: f.data_type,
                        required: None,
                        format: None,
                        nested: f.nested,
                        children: None,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_filter_excludes_untagged_fields() {
        let out = MetadataParser.parse(EntityKind::List, &[Group::ListCreate]);
        assert_eq!(out.len(), 2);
        assert!(out.contains_key("name"));
        assert!(out.contains_key("items"));
        assert!(!out.contains_key("id"));
    }

    #[test]
    fn item_create_exposes_entry_and_back_reference() {
        let out = MetadataParser.parse(EntityKind::Item, &[Group::ItemCreate]);
        assert_eq!(out.len(), 2);
        assert_eq!(out["list"].nested, Some(EntityKind::List));
        assert_eq!(out["entry"].data_type, "string");
    }

    #[test]
    fn no_matching_group_yields_empty_schema() {
        let out = MetadataParser.parse(EntityKind::List, &[Group::ItemUpdate]);
        assert!(out.is_empty());
    }
}
