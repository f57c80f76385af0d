//! Loading schemas from JSON descriptions.
//!
//! A schema description looks like:
//!
//! ```json
//! {
//!   "name": "Valid",
//!   "fields": [
//!     { "name": "Required", "labels": { "json": "required" }, "constraints": { "require": true } },
//!     { "name": "Number", "constraints": { "goodChars": "0123456789" } }
//!   ]
//! }
//! ```
//!
//! A registry description is a JSON array of schema descriptions.

use crate::{FieldDef, Registry, RegistryBuilder, Schema, SchemaBuilder, SchemaResult};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaDoc {
    name: String,
    #[serde(default)]
    fields: Vec<FieldDef>,
}

impl SchemaDoc {
    fn into_schema(self) -> SchemaResult<Schema> {
        SchemaBuilder::new(self.name).fields(self.fields).build()
    }
}

impl Schema {
    /// Parse a schema description. Goes through the same checks as the builder.
    pub fn from_json(source: &str) -> SchemaResult<Schema> {
        let doc: SchemaDoc = serde_json::from_str(source)?;
        doc.into_schema()
    }
}

impl Registry {
    /// Parse a registry description (an array of schema descriptions).
    pub fn from_json(source: &str) -> SchemaResult<Registry> {
        let docs: Vec<SchemaDoc> = serde_json::from_str(source)?;
        let mut builder = RegistryBuilder::new();
        for doc in docs {
            builder.register(doc.into_schema()?)?;
        }
        Ok(builder.build())
    }
}
