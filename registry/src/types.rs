//! Schema definition types.

use fieldguard_constraint::{ValueChecker, Verdict};
use serde::Deserialize;
use std::collections::BTreeMap;

/// The constraint clauses attached to one field.
///
/// Every clause is optional and they combine with AND. A clause holding an
/// empty string is the same as an absent clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ConstraintSet {
    /// The field's value (or list) must be non-empty.
    pub require: bool,
    /// Comma-separated list of the only permitted values.
    pub allow: Option<String>,
    /// The only characters a value may contain.
    pub good_chars: Option<String>,
    /// Characters a value must not contain.
    pub bad_chars: Option<String>,
    /// Regex a value must contain a match for.
    #[serde(rename = "match")]
    pub match_pattern: Option<String>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self) -> Self {
        self.require = true;
        self
    }

    pub fn allow(mut self, allow: impl Into<String>) -> Self {
        self.allow = Some(allow.into());
        self
    }

    /// Set the allow list from individual values.
    pub fn allow_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.allow = Some(joined);
        self
    }

    pub fn good_chars(mut self, chars: impl Into<String>) -> Self {
        self.good_chars = Some(chars.into());
        self
    }

    pub fn bad_chars(mut self, chars: impl Into<String>) -> Self {
        self.bad_chars = Some(chars.into());
        self
    }

    pub fn match_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.match_pattern = Some(pattern.into());
        self
    }

    /// The allow clause, or `""` when absent.
    pub fn allow_str(&self) -> &str {
        self.allow.as_deref().unwrap_or("")
    }

    /// The good_chars clause, or `""` when absent.
    pub fn good_chars_str(&self) -> &str {
        self.good_chars.as_deref().unwrap_or("")
    }

    /// The bad_chars clause, or `""` when absent.
    pub fn bad_chars_str(&self) -> &str {
        self.bad_chars.as_deref().unwrap_or("")
    }

    /// The match clause, or `""` when absent.
    pub fn match_str(&self) -> &str {
        self.match_pattern.as_deref().unwrap_or("")
    }

    /// True when no clause constrains the field. Such fields are skipped.
    pub fn is_empty(&self) -> bool {
        !self.require
            && self.allow_str().is_empty()
            && self.good_chars_str().is_empty()
            && self.bad_chars_str().is_empty()
            && self.match_str().is_empty()
    }

    /// Check a single value against the four string clauses.
    /// `require` is a record-level clause and is not consulted here.
    pub fn check(&self, value: &str) -> Verdict {
        self.checker().check(value)
    }

    /// Compile the string clauses once, for checking several values.
    pub fn checker(&self) -> ValueChecker<'_> {
        ValueChecker::new(
            self.allow_str(),
            self.good_chars_str(),
            self.bad_chars_str(),
            self.match_str(),
        )
    }
}

/// A field declared on a record type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    /// Field identifier as declared on the record.
    pub name: String,
    /// Constraint clauses for this field.
    #[serde(default)]
    pub constraints: ConstraintSet,
    /// Alternate names keyed by label key (e.g. "json" -> "required").
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: ConstraintSet::default(),
            labels: BTreeMap::new(),
        }
    }

    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(key.into(), label.into());
        self
    }

    /// The alternate name under `key`, or `""` if this field has none.
    pub fn label(&self, key: &str) -> &str {
        self.labels.get(key).map(String::as_str).unwrap_or("")
    }

    /// Whether any clause constrains this field.
    pub fn is_constrained(&self) -> bool {
        !self.constraints.is_empty()
    }
}

/// The constraint table for one record type, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Record type name.
    pub name: String,
    /// Field definitions in declaration order.
    pub(crate) fields: Vec<FieldDef>,
}

impl Schema {
    /// Start building a schema (see [`SchemaBuilder`](crate::SchemaBuilder)).
    pub fn builder(name: impl Into<String>) -> crate::SchemaBuilder {
        crate::SchemaBuilder::new(name)
    }

    /// All fields, in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Fields carrying at least one clause, in declaration order.
    pub fn constrained_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_constrained())
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if this schema declares a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.get_field(name).is_some()
    }

    /// Get all field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
