//! Fieldguard
//!
//! Declarative field validation for flat records.
//!
//! Each record type declares a constraint table (a [`Schema`]). Every field
//! may carry up to five clauses: `require`, `allow`, `good_chars`,
//! `bad_chars` and `match`. The walker checks single text fields and lists of
//! text fields in declaration order and returns the first violation.
//!
//! # Module Structure
//!
//! - `record` - the `Record` accessor trait, `FieldMap` and `impl_record!`
//! - `walker` - `validate`, `validate_using_label` and `validate_with`
//! - `error` - errors for records read from JSON
//!
//! # Example
//!
//! ```
//! use fieldguard::{validate, ConstraintSet, FieldDef, FieldMap, Schema};
//!
//! let schema = Schema::builder("Valid")
//!     .field(FieldDef::new("Number").with_constraints(ConstraintSet::new().good_chars("0123456789")))
//!     .build()
//!     .unwrap();
//!
//! let record = FieldMap::new(&schema).with("Number", "55asdg64");
//! assert_eq!(
//!     validate(&record).unwrap_err().to_string(),
//!     "Field Number: Value 55asdg64 contains invalid char a"
//! );
//! ```

mod error;
mod record;
mod walker;

pub use error::{RecordError, RecordResult};
pub use record::{AsFieldValue, FieldMap, Record};
pub use walker::{validate, validate_using_label, validate_with, Naming};

pub use fieldguard_constraint::{
    check_value, is_valid, ValueChecker, Verdict, Violation, ViolationKind,
};
pub use fieldguard_core::{fields, FieldData, FieldValue, Fields, ValidationError, ValidationResult};
pub use fieldguard_registry::{
    ConstraintSet, FieldDef, Registry, RegistryBuilder, Schema, SchemaBuilder, SchemaError,
    SchemaResult,
};

#[doc(hidden)]
pub mod __private {
    use crate::{Schema, SchemaBuilder};

    /// Build a schema declared through `impl_record!`.
    pub fn build_static(builder: SchemaBuilder) -> Schema {
        builder
            .build()
            .unwrap_or_else(|err| panic!("invalid record schema: {err}"))
    }
}
