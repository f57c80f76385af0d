//! Builders for constructing immutable schemas and registries.

use crate::{FieldDef, Registry, Schema};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors that can occur during schema construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema name must not be empty")]
    EmptySchemaName,

    #[error("Empty field name in schema: {schema}")]
    EmptyFieldName { schema: String },

    #[error("Duplicate field name: {field} in schema {schema}")]
    DuplicateField { schema: String, field: String },

    #[error("Duplicate schema name: {0}")]
    DuplicateSchema(String),

    #[error("Invalid schema description: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    pub fn empty_field_name(schema: impl Into<String>) -> Self {
        Self::EmptyFieldName {
            schema: schema.into(),
        }
    }

    pub fn duplicate_field(schema: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            schema: schema.into(),
            field: field.into(),
        }
    }

    pub fn duplicate_schema(name: impl Into<String>) -> Self {
        Self::DuplicateSchema(name.into())
    }
}

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Builder for a single record schema.
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldDef>,
}

impl SchemaBuilder {
    /// Create a new builder for the named record type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare the next field. Declaration order is reporting order.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare several fields at once.
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Finish building the schema.
    pub fn build(self) -> SchemaResult<Schema> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptySchemaName);
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(SchemaError::empty_field_name(&self.name));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::duplicate_field(&self.name, &field.name));
            }
            if field.constraints.checker().has_malformed_pattern() {
                // Not fatal: the clause fails every value instead.
                tracing::warn!(
                    schema = %self.name,
                    field = %field.name,
                    pattern = field.constraints.match_str(),
                    "malformed match pattern, field will reject every value"
                );
            }
        }

        Ok(Schema {
            name: self.name,
            fields: self.fields,
        })
    }
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Schemas being built, in registration order.
    schemas: Vec<Schema>,
    /// Schema name to index mapping.
    schema_names: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema definition.
    pub fn add_schema(&mut self, name: impl Into<String>) -> SchemaEntryBuilder<'_> {
        SchemaEntryBuilder {
            builder: self,
            inner: SchemaBuilder::new(name),
        }
    }

    /// Register an already-built schema.
    pub fn register(&mut self, schema: Schema) -> SchemaResult<()> {
        if self.schema_names.contains_key(&schema.name) {
            return Err(SchemaError::duplicate_schema(schema.name));
        }
        self.schema_names
            .insert(schema.name.clone(), self.schemas.len());
        self.schemas.push(schema);
        Ok(())
    }

    /// Build the registry.
    pub fn build(self) -> Registry {
        Registry::new(self.schemas, self.schema_names)
    }
}

/// Builder for a schema registered directly into a [`RegistryBuilder`].
pub struct SchemaEntryBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    inner: SchemaBuilder,
}

impl<'a> SchemaEntryBuilder<'a> {
    /// Declare the next field.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.inner = self.inner.field(field);
        self
    }

    /// Finish building this schema and register it.
    pub fn done(self) -> SchemaResult<()> {
        let schema = self.inner.build()?;
        self.builder.register(schema)
    }
}
