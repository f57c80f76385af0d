//! Field value shapes.
//!
//! Only two shapes are validated: a single text value and an ordered list of
//! text values. Every other shape is carried as `Other` with a type name so it
//! can be reported and skipped.

use std::collections::HashMap;
use std::fmt;

/// A borrowed view of a field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A single text value.
    Single(&'a str),
    /// An ordered list of text values.
    Many(&'a [String]),
    /// Any other shape (numbers, flags, nested data). Never validated.
    Other(&'static str),
}

impl<'a> FieldValue<'a> {
    /// Returns true if this is a single text value.
    pub fn is_single(&self) -> bool {
        matches!(self, FieldValue::Single(_))
    }

    /// Returns true if this is a list of text values.
    pub fn is_many(&self) -> bool {
        matches!(self, FieldValue::Many(_))
    }

    /// Returns true if this shape is skipped by validation.
    pub fn is_other(&self) -> bool {
        matches!(self, FieldValue::Other(_))
    }

    /// Returns true for an empty text value or an empty list.
    /// `Other` is never considered empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Single(s) => s.is_empty(),
            FieldValue::Many(items) => items.is_empty(),
            FieldValue::Other(_) => false,
        }
    }

    /// Returns the shape name of this value.
    pub fn shape_name(&self) -> &'static str {
        match self {
            FieldValue::Single(_) => "String",
            FieldValue::Many(_) => "List",
            FieldValue::Other(name) => name,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Single(s) => write!(f, "\"{}\"", s),
            FieldValue::Many(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\"", item)?;
                }
                write!(f, "]")
            }
            FieldValue::Other(name) => write!(f, "<{}>", name),
        }
    }
}

/// An owned field value, for records assembled at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldData {
    /// A single text value.
    Single(String),
    /// An ordered list of text values.
    Many(Vec<String>),
    /// Any other shape, by type name.
    Other(&'static str),
}

impl FieldData {
    /// Borrow this value as a `FieldValue`.
    pub fn as_value(&self) -> FieldValue<'_> {
        match self {
            FieldData::Single(s) => FieldValue::Single(s),
            FieldData::Many(items) => FieldValue::Many(items),
            FieldData::Other(name) => FieldValue::Other(name),
        }
    }
}

impl From<&str> for FieldData {
    fn from(s: &str) -> Self {
        FieldData::Single(s.to_string())
    }
}

impl From<String> for FieldData {
    fn from(s: String) -> Self {
        FieldData::Single(s)
    }
}

impl From<Vec<String>> for FieldData {
    fn from(items: Vec<String>) -> Self {
        FieldData::Many(items)
    }
}

impl From<Vec<&str>> for FieldData {
    fn from(items: Vec<&str>) -> Self {
        FieldData::Many(items.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FieldData {
    fn from(items: [&str; N]) -> Self {
        FieldData::Many(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<i64> for FieldData {
    fn from(_: i64) -> Self {
        FieldData::Other("Int")
    }
}

impl From<i32> for FieldData {
    fn from(_: i32) -> Self {
        FieldData::Other("Int")
    }
}

impl From<bool> for FieldData {
    fn from(_: bool) -> Self {
        FieldData::Other("Bool")
    }
}

/// Type alias for owned field storage.
pub type Fields = HashMap<String, FieldData>;

/// Helper macro to create field maps.
#[macro_export]
macro_rules! fields {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), $crate::FieldData::from($value));
            )+
            map
        }
    };
}
