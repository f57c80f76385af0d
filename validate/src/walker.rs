//! The record walker.
//!
//! Walks a record's schema in declaration order and stops at the first
//! violation. Fields without clauses and fields of any shape other than a
//! single text value or a list of text values are skipped.

use fieldguard_constraint::Verdict;
use fieldguard_core::{FieldValue, ValidationError, ValidationResult};
use fieldguard_registry::FieldDef;

use crate::record::Record;

/// How a failing field is named in the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Naming<'k> {
    /// The field's declared identifier.
    #[default]
    Identifier,
    /// The field's alternate label under this key, `""` when it has none.
    Label(&'k str),
}

impl Naming<'_> {
    /// Resolve the reporting name of a field.
    pub fn resolve<'f>(&self, field: &'f FieldDef) -> &'f str {
        match self {
            Naming::Identifier => &field.name,
            Naming::Label(key) => field.label(key),
        }
    }
}

/// Validate a record, naming failing fields by their identifier.
pub fn validate<R: Record + ?Sized>(record: &R) -> ValidationResult<()> {
    validate_with(record, Naming::Identifier)
}

/// Validate a record, naming failing fields by their label under `label_key`.
pub fn validate_using_label<R: Record + ?Sized>(
    record: &R,
    label_key: &str,
) -> ValidationResult<()> {
    validate_with(record, Naming::Label(label_key))
}

/// Validate a record with the given naming. Returns the first violation found.
pub fn validate_with<R: Record + ?Sized>(record: &R, naming: Naming<'_>) -> ValidationResult<()> {
    let schema = record.schema();

    for field in schema.fields() {
        if !field.is_constrained() {
            tracing::trace!(schema = %schema.name, field = %field.name, "no constraints, skipping");
            continue;
        }

        // A field the record does not expose reads as empty.
        let value = record.field(&field.name).unwrap_or(FieldValue::Single(""));

        if let Err(err) = check_field(field, value, naming) {
            tracing::debug!(
                schema = %schema.name,
                field = %field.name,
                error = %err,
                "record failed validation"
            );
            return Err(err);
        }
    }

    Ok(())
}

fn check_field(field: &FieldDef, value: FieldValue<'_>, naming: Naming<'_>) -> ValidationResult<()> {
    let constraints = &field.constraints;

    match value {
        FieldValue::Single(text) => {
            if !text.is_empty() {
                if let Verdict::Invalid(violation) = constraints.check(text) {
                    return Err(ValidationError::invalid_value(
                        naming.resolve(field),
                        violation.message,
                    ));
                }
            } else if constraints.require {
                return Err(ValidationError::missing_required(naming.resolve(field)));
            }
        }
        FieldValue::Many(items) => {
            if !items.is_empty() {
                // One compiled pattern for every element.
                let checker = constraints.checker();
                for item in items {
                    if let Verdict::Invalid(violation) = checker.check(item) {
                        return Err(ValidationError::invalid_value(
                            naming.resolve(field),
                            violation.message,
                        ));
                    }
                }
            } else if constraints.require {
                return Err(ValidationError::missing_required_list(naming.resolve(field)));
            }
        }
        FieldValue::Other(shape) => {
            tracing::trace!(field = %field.name, shape, "unsupported shape, skipping");
        }
    }

    Ok(())
}
