//! Record validation errors.
//!
//! Display strings are consumed by callers that parse them, so each format is
//! kept byte-for-byte stable.

use thiserror::Error;

/// The first violation found while walking a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A value failed one of its constraint clauses.
    #[error("Field {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// A required single-value field was empty or absent.
    #[error("Field {field}: Missing required field")]
    MissingRequired { field: String },

    /// A required list field was empty.
    #[error("Missing required field {field}")]
    MissingRequiredList { field: String },
}

impl ValidationError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_required(field: impl Into<String>) -> Self {
        Self::MissingRequired {
            field: field.into(),
        }
    }

    pub fn missing_required_list(field: impl Into<String>) -> Self {
        Self::MissingRequiredList {
            field: field.into(),
        }
    }

    /// The reported field name (identifier or label, depending on the walker).
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidValue { field, .. }
            | Self::MissingRequired { field }
            | Self::MissingRequiredList { field } => field,
        }
    }

    /// Returns true for either missing-required form.
    pub fn is_missing_required(&self) -> bool {
        matches!(
            self,
            Self::MissingRequired { .. } | Self::MissingRequiredList { .. }
        )
    }
}

/// Result type for record validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
