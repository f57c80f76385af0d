//! The Registry - immutable schema lookup.

use crate::Schema;
use std::collections::HashMap;

/// The Registry holds the constraint tables for every record type.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Registry {
    /// Schemas in registration order.
    schemas: Vec<Schema>,
    /// Schema index lookup by name.
    schema_names: HashMap<String, usize>,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(schemas: Vec<Schema>, schema_names: HashMap<String, usize>) -> Self {
        Self {
            schemas,
            schema_names,
        }
    }

    /// Get a schema by record type name.
    pub fn get_schema(&self, name: &str) -> Option<&Schema> {
        self.schema_names
            .get(name)
            .and_then(|&idx| self.schemas.get(idx))
    }

    /// Check if a record type is registered.
    pub fn has_schema(&self, name: &str) -> bool {
        self.schema_names.contains_key(name)
    }

    /// All schemas, in registration order.
    pub fn schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.iter()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
