//! Field-level validation rules. Feed two consumers: the schema parser
//! (required/format overlay) and the HTTP layer (request validation with
//! aggregated messages).

use super::EntityKind;
use crate::error::AppError;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

enum Check {
    /// Present, a string, and non-blank.
    NonBlank,
    /// Present and a non-null string.
    NonNull,
    /// If present and a string, must match the pattern.
    Pattern(&'static str),
}

struct FieldRule {
    field: &'static str,
    required: bool,
    check: Check,
    message: &'static str,
}

const LIST_RULES: &[FieldRule] = &[
    FieldRule {
        field: "id",
        required: false,
        check: Check::Pattern(r"^\d*$"),
        message: "'id' - required.",
    },
    FieldRule {
        field: "name",
        required: true,
        check: Check::NonBlank,
        message: "'name' - required and must be a non-empty string.",
    },
];

const ITEM_RULES: &[FieldRule] = &[
    FieldRule {
        field: "id",
        required: false,
        check: Check::Pattern(r"^\d*$"),
        message: "'id' - required.",
    },
    FieldRule {
        field: "entry",
        required: true,
        check: Check::NonNull,
        message: "'entry' - required.",
    },
];

fn rules_of(entity: EntityKind) -> &'static [FieldRule] {
    match entity {
        EntityKind::List => LIST_RULES,
        EntityKind::Item => ITEM_RULES,
    }
}

/// Overlay entry produced for the schema parser.
pub struct RuleOverlay {
    pub required: Option<bool>,
    pub format: Option<&'static str>,
}

pub struct RulesParser;

impl RulesParser {
    pub fn supports(&self, entity: EntityKind) -> bool {
        !rules_of(entity).is_empty()
    }

    pub fn parse(&self, entity: EntityKind) -> BTreeMap<String, RuleOverlay> {
        rules_of(entity)
            .iter()
            .map(|r| {
                let format = match r.check {
                    Check::Pattern(p) => Some(p),
                    Check::NonBlank => Some("non-empty string"),
                    Check::NonNull => None,
                };
                (
                    r.field.to_string(),
                    RuleOverlay {
                        required: Some(r.required),
                        format,
                    },
                )
            })
            .collect()
    }
}

/// Violation messages for a body. With `partial` set, rules only apply to
/// fields present in the body (update semantics).
pub fn violations(entity: EntityKind, body: &Map<String, Value>, partial: bool) -> Vec<String> {
    let mut out = Vec::new();
    for rule in rules_of(entity) {
        let Some(value) = body.get(rule.field) else {
            if rule.required && !partial {
                out.push(rule.message.to_string());
            }
            continue;
        };
        let ok = match rule.check {
            Check::NonBlank => value.as_str().is_some_and(|s| !s.trim().is_empty()),
            Check::NonNull => value.as_str().is_some(),
            Check::Pattern(p) => match value {
                Value::String(s) => Regex::new(p).map(|re| re.is_match(s)).unwrap_or(false),
                Value::Number(n) => n.as_u64().is_some(),
                _ => false,
            },
        };
        if !ok {
            out.push(rule.message.to_string());
        }
    }
    out
}

/// Full validation: required rules enforced. Messages are aggregated into
/// one error, joined by spaces.
pub fn validate(entity: EntityKind, body: &Map<String, Value>) -> Result<(), AppError> {
    collect(violations(entity, body, false))
}

/// Partial validation for updates: only fields present in the body.
pub fn validate_partial(entity: EntityKind, body: &Map<String, Value>) -> Result<(), AppError> {
    collect(violations(entity, body, true))
}

pub fn collect(errors: Vec<String>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn missing_name_is_required_on_create() {
        let errs = violations(EntityKind::List, &body(json!({})), false);
        assert_eq!(errs, vec!["'name' - required and must be a non-empty string."]);
    }

    #[test]
    fn blank_name_fails_even_on_partial() {
        let errs = violations(EntityKind::List, &body(json!({ "name": "  " })), true);
        assert_eq!(errs.len(), 1);
    }

    #[test]
    fn partial_skips_absent_required_fields() {
        let errs = violations(EntityKind::Item, &body(json!({})), true);
        assert!(errs.is_empty());
    }

    #[test]
    fn null_entry_is_rejected() {
        let errs = violations(EntityKind::Item, &body(json!({ "entry": null })), false);
        assert_eq!(errs, vec!["'entry' - required."]);
    }

    #[test]
    fn messages_aggregate_into_one_error() {
        let err = validate(
            EntityKind::Item,
            &body(json!({ "id": "x1", "entry": null })),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "'id' - required. 'entry' - required.");
    }

    #[test]
    fn digit_string_and_integer_ids_pass() {
        assert!(violations(EntityKind::Item, &body(json!({ "id": "12", "entry": "x" })), false).is_empty());
        assert!(violations(EntityKind::Item, &body(json!({ "id": 12, "entry": "x" })), false).is_empty());
    }
}
