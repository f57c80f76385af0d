//! Fieldguard Registry
//!
//! Per-record-type constraint tables, built once and read by the record walker.
//!
//! - `types` - `ConstraintSet`, `FieldDef`, `Schema`
//! - `builder` - `SchemaBuilder`, `RegistryBuilder` and construction errors
//! - `registry` - the immutable `Registry`
//! - `loader` - JSON schema descriptions

mod builder;
mod loader;
mod registry;
mod types;

pub use builder::{RegistryBuilder, SchemaBuilder, SchemaEntryBuilder, SchemaError, SchemaResult};
pub use registry::Registry;
pub use types::{ConstraintSet, FieldDef, Schema};
