//! Record access.
//!
//! A record exposes its constraint table and read-only access to its field
//! values. Plain structs opt in with [`impl_record!`](crate::impl_record);
//! records assembled at runtime use [`FieldMap`].

use fieldguard_core::{FieldData, FieldValue, Fields};
use fieldguard_registry::Schema;

use crate::error::{RecordError, RecordResult};

/// A record that can be validated.
pub trait Record {
    /// The constraint table for this record's type.
    fn schema(&self) -> &Schema;

    /// The current value of the named field, or `None` if the record has no
    /// such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Conversion from a struct field's type to a [`FieldValue`].
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Single(self)
    }
}

impl AsFieldValue for &str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Single(self)
    }
}

impl AsFieldValue for Vec<String> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Many(self)
    }
}

/// An unset optional text field reads as empty.
impl AsFieldValue for Option<String> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Single(self.as_deref().unwrap_or(""))
    }
}

impl AsFieldValue for FieldData {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_value()
    }
}

macro_rules! other_shape {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Other($name)
                }
            }
        )*
    };
}

other_shape! {
    bool => "Bool",
    i32 => "Int",
    i64 => "Int",
    u32 => "Int",
    u64 => "Int",
    usize => "Int",
    f64 => "Float",
}

/// A record assembled at runtime, owning its values.
#[derive(Debug, Clone)]
pub struct FieldMap<'s> {
    schema: &'s Schema,
    values: Fields,
}

impl<'s> FieldMap<'s> {
    /// Create an empty record of the given type.
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            values: Fields::new(),
        }
    }

    /// Create a record from an existing field map.
    pub fn from_fields(schema: &'s Schema, values: Fields) -> Self {
        Self { schema, values }
    }

    /// Set a field, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldData>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldData>) -> Option<FieldData> {
        self.values.insert(name.into(), value.into())
    }

    /// Get a field's owned value.
    pub fn get(&self, name: &str) -> Option<&FieldData> {
        self.values.get(name)
    }

    /// Parse a JSON object keyed by field identifier.
    pub fn from_json(schema: &'s Schema, source: &str) -> RecordResult<Self> {
        Self::from_json_keyed(schema, source, None)
    }

    /// Parse a JSON object keyed by the fields' labels under `label_key`,
    /// e.g. an API payload whose keys are the external names.
    pub fn from_json_labeled(schema: &'s Schema, source: &str, label_key: &str) -> RecordResult<Self> {
        Self::from_json_keyed(schema, source, Some(label_key))
    }

    fn from_json_keyed(
        schema: &'s Schema,
        source: &str,
        label_key: Option<&str>,
    ) -> RecordResult<Self> {
        let object = match serde_json::from_str::<serde_json::Value>(source)? {
            serde_json::Value::Object(object) => object,
            other => return Err(RecordError::not_an_object(json_type_name(&other))),
        };

        let mut record = Self::new(schema);
        for (key, value) in object {
            // Unlabeled fields resolve to "" and are never keyed by it.
            let field = schema.fields().iter().find(|f| match label_key {
                Some(label_key) => {
                    let label = f.label(label_key);
                    !label.is_empty() && label == key
                }
                None => f.name == key,
            });
            match field {
                Some(field) => {
                    record.set(field.name.clone(), json_to_field(&value));
                }
                None => tracing::trace!(schema = %schema.name, key = %key, "ignoring unknown key"),
            }
        }
        Ok(record)
    }
}

impl Record for FieldMap<'_> {
    fn schema(&self) -> &Schema {
        self.schema
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.values.get(name).map(FieldData::as_value)
    }
}

fn json_to_field(value: &serde_json::Value) -> FieldData {
    use serde_json::Value;

    match value {
        Value::String(s) => FieldData::Single(s.clone()),
        Value::Array(items) => {
            let strings: Option<Vec<String>> = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect();
            match strings {
                Some(strings) => FieldData::Many(strings),
                None => FieldData::Other("Array"),
            }
        }
        other => FieldData::Other(json_type_name(other)),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Bool",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// Implement [`Record`] for a plain struct.
///
/// The schema expression is a [`SchemaBuilder`](crate::SchemaBuilder); it is
/// built once, on first use, and cached for the life of the program. The
/// listed fields are exposed by their identifiers and must implement
/// [`AsFieldValue`].
///
/// # Example
///
/// ```
/// use fieldguard::{impl_record, validate, ConstraintSet, FieldDef, Schema};
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl_record!(User {
///     schema: Schema::builder("User")
///         .field(FieldDef::new("name").with_constraints(ConstraintSet::new().require())),
///     fields: [name, age],
/// });
///
/// let user = User { name: String::new(), age: 30 };
/// assert_eq!(
///     validate(&user).unwrap_err().to_string(),
///     "Field name: Missing required field"
/// );
/// ```
///
/// # Panics
///
/// The first validation of the type panics if the schema builder rejects
/// its fields (duplicate or empty names).
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { schema: $schema:expr, fields: [$($field:ident),* $(,)?] $(,)? }) => {
        impl $crate::Record for $ty {
            fn schema(&self) -> &$crate::Schema {
                static SCHEMA: ::std::sync::OnceLock<$crate::Schema> = ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| $crate::__private::build_static($schema))
            }

            fn field(&self, name: &str) -> ::std::option::Option<$crate::FieldValue<'_>> {
                match name {
                    $(
                        stringify!($field) => ::std::option::Option::Some(
                            $crate::AsFieldValue::as_field_value(&self.$field),
                        ),
                    )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}
