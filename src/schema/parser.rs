//! Combines the metadata and rules sources into full request-body schemas,
//! resolving nested object schemas recursively.

use super::{EntityKind, FieldSchema, Group, MetadataParser, RulesParser, SchemaQuery};
use std::collections::{BTreeMap, HashSet};

pub struct ApiParser {
    metadata: MetadataParser,
    rules: RulesParser,
}

type Visited = HashSet<(EntityKind, Vec<Group>)>;

impl ApiParser {
    /// Name a descriptor lists to request this parser.
    pub const NAME: &'static str = "api";

    pub fn new() -> Self {
        ApiParser {
            metadata: MetadataParser,
            rules: RulesParser,
        }
    }

    /// True when the descriptor names this parser and at least one source
    /// recognizes the entity.
    pub fn supports(&self, query: &SchemaQuery) -> bool {
        query.parsers.iter().any(|p| *p == Self::NAME)
            && (self.metadata.supports(query.entity) || self.rules.supports(query.entity))
    }

    pub fn parse(&self, query: &SchemaQuery) -> BTreeMap<String, FieldSchema> {
        let mut visited = Visited::new();
        self.parse_guarded(query.entity, &query.groups, &mut visited)
    }

    fn parse_guarded(
        &self,
        entity: EntityKind,
        groups: &[Group],
        visited: &mut Visited,
    ) -> BTreeMap<String, FieldSchema> {
        visited.insert((entity, groups_key(groups)));

        let mut params = self.metadata.parse(entity, groups);

        // Overlay only: rules never add fields the metadata does not list.
        for (name, overlay) in self.rules.parse(entity) {
            let Some(field) = params.get_mut(&name) else {
                continue;
            };
            if let Some(required) = overlay.required {
                field.required = Some(required);
            }
            if let Some(format) = overlay.format {
                field.format = Some(format);
            }
        }

        for field in params.values_mut() {
            let Some(nested) = field.nested else { continue };
            // Visited pairs terminate the recursion between entities that
            // reference each other.
            if visited.contains(&(nested, groups_key(groups))) {
                continue;
            }
            field.children = Some(self.parse_guarded(nested, groups, visited));
        }

        params
    }
}

impl Default for ApiParser {
    fn default() -> Self {
        ApiParser::new()
    }
}

fn groups_key(groups: &[Group]) -> Vec<Group> {
    let mut key = groups.to_vec();
    key.sort();
    key.dedup();
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(entity: EntityKind, groups: &[Group]) -> SchemaQuery {
        SchemaQuery {
            entity,
            groups: groups.to_vec(),
            parsers: vec![ApiParser::NAME],
        }
    }

    #[test]
    fn supports_needs_the_parser_name() {
        let parser = ApiParser::new();
        assert!(parser.supports(&query(EntityKind::List, &[Group::ListCreate])));
        let mut anonymous = query(EntityKind::List, &[Group::ListCreate]);
        anonymous.parsers = vec!["other"];
        assert!(!parser.supports(&anonymous));
    }

    #[test]
    fn scalar_and_nested_field_resolve_with_children() {
        let parser = ApiParser::new();
        let out = parser.parse(&query(EntityKind::List, &[Group::ListCreate]));
        assert_eq!(out.len(), 2);
        assert!(out["name"].children.is_none());

        let children = out["items"].children.as_ref().expect("nested children");
        let nested = parser.parse(&query(EntityKind::Item, &[Group::ListCreate]));
        assert_eq!(*children, nested);
        assert!(nested.contains_key("entry"));
    }

    #[test]
    fn rules_overlay_required_and_format() {
        let parser = ApiParser::new();
        let out = parser.parse(&query(EntityKind::List, &[Group::ListCreate]));
        assert_eq!(out["name"].required, Some(true));
        assert_eq!(out["name"].format, Some("non-empty string"));
        // Rules know about "id" but metadata excluded it for this group, so
        // the overlay must not add it.
        assert!(!out.contains_key("id"));
    }

    #[test]
    fn update_group_exposes_item_id_with_pattern_format() {
        let parser = ApiParser::new();
        let out = parser.parse(&query(EntityKind::Item, &[Group::ListUpdate]));
        assert_eq!(out["id"].required, Some(false));
        assert_eq!(out["id"].format, Some(r"^\d*$"));
    }

    #[test]
    fn mutual_references_terminate_via_visited_pairs() {
        let parser = ApiParser::new();
        let groups = [Group::ItemCreate, Group::ListCreate];
        let out = parser.parse(&query(EntityKind::Item, &groups));

        // item -> list resolves once...
        let list_children = out["list"].children.as_ref().expect("list children");
        // ...but list -> items does not recurse back into the item.
        let items = &list_children["items"];
        assert_eq!(items.nested, Some(EntityKind::Item));
        assert!(items.children.is_none());
    }

    #[test]
    fn group_order_does_not_defeat_the_guard() {
        let parser = ApiParser::new();
        let a = parser.parse(&query(EntityKind::Item, &[Group::ItemCreate, Group::ListCreate]));
        let b = parser.parse(&query(EntityKind::Item, &[Group::ListCreate, Group::ItemCreate]));
        assert_eq!(a, b);
    }
}
