//! Field plan construction.
//!
//! Turns the flat, ordered field list a user passes on the command line into
//! the per-field policy every artifact consults. Artifacts render
//! independently, so the plan must be a pure function of its input.

use crate::error::{Result, ScaffoldError};
use indexmap::IndexSet;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Fields used when the user does not supply any
pub const DEFAULT_FIELDS: [&str; 5] = ["id", "name", "status", "createdAt", "updatedAt"];

/// Column ids the generated table already uses
pub const RESERVED_FIELD_NAMES: [&str; 2] = ["select", "actions"];

/// Status literals emitted whenever a plan has a `status` field
pub const STATUS_VALUES: [&str; 2] = ["active", "inactive"];

fn field_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("field name pattern is valid")
    })
}

/// Classification of a field by its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Identifier,
    Timestamp,
    Status,
    Generic,
}

impl FieldKind {
    /// Classify by exact, case-sensitive match on the reserved names
    pub fn classify(name: &str) -> Self {
        match name {
            "id" => FieldKind::Identifier,
            "createdAt" | "updatedAt" => FieldKind::Timestamp,
            "status" => FieldKind::Status,
            _ => FieldKind::Generic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = FieldKind::classify(&name);
        FieldSpec { name, kind }
    }
}

/// Ordered field policy for one feature module
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldPlan {
    pub fields: Vec<FieldSpec>,
    pub has_status_field: bool,
}

impl FieldPlan {
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First generic field, used as the primary display column
    pub fn title_field(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.kind == FieldKind::Generic)
    }
}

/// Build the field plan from raw names.
///
/// An empty `raw_field_names` falls back to `defaults`. Names are trimmed,
/// must be valid JavaScript identifiers, must be unique and must not be one
/// of the [`RESERVED_FIELD_NAMES`].
///
/// # Example
///
/// ```
/// use featgen::codegen::fields::{build_plan, FieldKind, DEFAULT_FIELDS};
///
/// let plan = build_plan(&["id", "price"], &DEFAULT_FIELDS).unwrap();
/// assert_eq!(plan.fields[0].kind, FieldKind::Identifier);
/// assert!(!plan.has_status_field);
/// ```
pub fn build_plan<S: AsRef<str>, D: AsRef<str>>(
    raw_field_names: &[S],
    defaults: &[D],
) -> Result<FieldPlan> {
    let names: Vec<&str> = if raw_field_names.is_empty() {
        defaults.iter().map(|d| d.as_ref()).collect()
    } else {
        raw_field_names.iter().map(|f| f.as_ref()).collect()
    };

    let mut seen = IndexSet::with_capacity(names.len());

    for raw in names {
        let name = raw.trim();

        if name.is_empty() {
            return Err(ScaffoldError::InvalidField {
                name: raw.to_string(),
                reason: "field name must not be empty".to_string(),
            });
        }

        if !field_name_pattern().is_match(name) {
            return Err(ScaffoldError::InvalidField {
                name: name.to_string(),
                reason: "must be a valid JavaScript identifier".to_string(),
            });
        }

        if RESERVED_FIELD_NAMES.contains(&name) {
            return Err(ScaffoldError::InvalidField {
                name: name.to_string(),
                reason: "reserved for the table's selection and actions columns".to_string(),
            });
        }

        if !seen.insert(name) {
            return Err(ScaffoldError::DuplicateField(name.to_string()));
        }
    }

    let fields: Vec<FieldSpec> = seen.into_iter().map(FieldSpec::new).collect();
    let has_status_field = fields.iter().any(|f| f.kind == FieldKind::Status);

    Ok(FieldPlan {
        fields,
        has_status_field,
    })
}

/// Split a comma separated `--fields` value
pub fn parse_field_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(',').map(|f| f.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FIELDS: [&str; 0] = [];

    #[test]
    fn test_default_fields_substituted() {
        let plan = build_plan(&NO_FIELDS, &DEFAULT_FIELDS).unwrap();
        assert_eq!(plan.names(), DEFAULT_FIELDS.to_vec());
        assert!(plan.has_status_field);
        assert_eq!(
            plan.fields.iter().map(|f| f.kind).collect::<Vec<_>>(),
            vec![
                FieldKind::Identifier,
                FieldKind::Generic,
                FieldKind::Status,
                FieldKind::Timestamp,
                FieldKind::Timestamp,
            ]
        );
    }

    #[test]
    fn test_plan_is_deterministic() {
        let fields = ["id", "name", "price", "status"];
        let first = build_plan(&fields, &DEFAULT_FIELDS).unwrap();
        for _ in 0..10 {
            assert_eq!(build_plan(&fields, &DEFAULT_FIELDS).unwrap(), first);
        }
    }

    #[test]
    fn test_order_preserved() {
        let plan = build_plan(&["updatedAt", "sku", "id"], &DEFAULT_FIELDS).unwrap();
        assert_eq!(plan.names(), vec!["updatedAt", "sku", "id"]);
        assert!(!plan.has_status_field);
        assert_eq!(plan.title_field().map(|f| f.name.as_str()), Some("sku"));
    }

    #[test]
    fn test_classification_is_case_sensitive() {
        assert_eq!(FieldKind::classify("id"), FieldKind::Identifier);
        assert_eq!(FieldKind::classify("ID"), FieldKind::Generic);
        assert_eq!(FieldKind::classify("Identifier"), FieldKind::Generic);
        assert_eq!(FieldKind::classify("Status"), FieldKind::Generic);
        assert_eq!(FieldKind::classify("createdAt"), FieldKind::Timestamp);
        assert_eq!(FieldKind::classify("created_at"), FieldKind::Generic);
    }

    #[test]
    fn test_duplicate_fields_rejected() {
        let err = build_plan(&["id", "name", "id"], &DEFAULT_FIELDS).unwrap_err();
        assert!(matches!(err, ScaffoldError::DuplicateField(ref name) if name == "id"));

        // whitespace does not hide a duplicate
        assert!(build_plan(&["name", " name "], &DEFAULT_FIELDS).is_err());
    }

    #[test]
    fn test_invalid_fields_rejected() {
        assert!(matches!(
            build_plan(&["id", ""], &DEFAULT_FIELDS),
            Err(ScaffoldError::InvalidField { .. })
        ));
        assert!(matches!(
            build_plan(&["first-name"], &DEFAULT_FIELDS),
            Err(ScaffoldError::InvalidField { .. })
        ));
        assert!(build_plan(&["2nd"], &DEFAULT_FIELDS).is_err());
    }

    #[test]
    fn test_column_ids_are_reserved() {
        for reserved in RESERVED_FIELD_NAMES {
            assert!(matches!(
                build_plan(&["id", reserved], &DEFAULT_FIELDS),
                Err(ScaffoldError::InvalidField { ref name, .. }) if name == reserved
            ));
        }

        // matching is exact, like field classification
        assert!(build_plan(&["Select", "actionsTaken"], &DEFAULT_FIELDS).is_ok());
    }

    #[test]
    fn test_parse_field_list() {
        assert_eq!(parse_field_list("id, name,price"), vec!["id", "name", "price"]);
        assert_eq!(parse_field_list("id,,name"), vec!["id", "", "name"]);
        assert!(parse_field_list("  ").is_empty());
    }
}
