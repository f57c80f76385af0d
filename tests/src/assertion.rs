//! Assertion types and builders for verifying step results.

use fieldguard::{ValidationError, ValidationResult};

use crate::error::{HarnessError, HarnessResult};

/// The expected shape of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidValue,
    MissingRequired,
    MissingRequiredList,
}

/// A complete assertion for a step result.
#[derive(Debug, Default)]
pub struct Assertion {
    pub valid: Option<bool>,
    pub field: Option<String>,
    pub kind: Option<ErrorKind>,

    // Message assertions
    pub exact: Option<String>,
    pub error: Option<String>,
    pub error_pattern: Option<String>,
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against a validation result.
    pub fn verify(&self, step: &str, result: &ValidationResult<()>) -> HarnessResult<()> {
        if let Some(expected_valid) = self.valid {
            match (expected_valid, result) {
                (true, Err(err)) => {
                    return Err(HarnessError::assertion_failed(
                        step,
                        format!("expected valid record, got: {}", err),
                    ))
                }
                (false, Ok(())) => {
                    return Err(HarnessError::assertion_failed(
                        step,
                        "expected validation error, but record is valid",
                    ))
                }
                _ => {}
            }
        }

        let err = match result {
            Ok(()) => {
                if self.expects_error() {
                    return Err(HarnessError::assertion_failed(
                        step,
                        "expected validation error, but record is valid",
                    ));
                }
                return Ok(());
            }
            Err(err) => err,
        };

        let message = err.to_string();

        if let Some(ref expected_field) = self.field {
            if err.field() != expected_field {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!(
                        "field mismatch:\n  expected: \"{}\"\n  actual:   \"{}\"",
                        expected_field,
                        err.field()
                    ),
                ));
            }
        }

        if let Some(expected_kind) = self.kind {
            let actual_kind = kind_of(err);
            if actual_kind != expected_kind {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!(
                        "error kind mismatch:\n  expected: {:?}\n  actual:   {:?} ({})",
                        expected_kind, actual_kind, message
                    ),
                ));
            }
        }

        if let Some(ref expected) = self.exact {
            if message != *expected {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!(
                        "message mismatch:\n  expected: \"{}\"\n  actual:   \"{}\"",
                        expected, message
                    ),
                ));
            }
        }

        if let Some(ref expected_error) = self.error {
            if !message.contains(expected_error.as_str()) {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!(
                        "expected error containing '{}', got: {}",
                        expected_error, message
                    ),
                ));
            }
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                HarnessError::assertion_failed(step, format!("invalid regex pattern: {}", e))
            })?;
            if !re.is_match(&message) {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!("expected error matching '{}', got: {}", pattern, message),
                ));
            }
        }

        Ok(())
    }

    fn expects_error(&self) -> bool {
        self.field.is_some()
            || self.kind.is_some()
            || self.exact.is_some()
            || self.error.is_some()
            || self.error_pattern.is_some()
    }
}

/// Fluent builder for assertions.
#[derive(Debug, Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Assertion {
        self.assertion
    }

    /// Assert that the record passes validation.
    pub fn valid(mut self) -> Self {
        self.assertion.valid = Some(true);
        self
    }

    /// Assert that the record fails validation, whatever the reason.
    pub fn invalid(mut self) -> Self {
        self.assertion.valid = Some(false);
        self
    }

    /// Assert the reported field name.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.assertion.field = Some(name.into());
        self
    }

    /// Assert that a clause rejected a value.
    pub fn invalid_value(mut self) -> Self {
        self.assertion.kind = Some(ErrorKind::InvalidValue);
        self
    }

    /// Assert the single-value missing-required failure.
    pub fn missing_required(mut self) -> Self {
        self.assertion.kind = Some(ErrorKind::MissingRequired);
        self
    }

    /// Assert the list missing-required failure.
    pub fn missing_required_list(mut self) -> Self {
        self.assertion.kind = Some(ErrorKind::MissingRequiredList);
        self
    }

    /// Assert the full diagnostic text.
    pub fn exact(mut self, message: impl Into<String>) -> Self {
        self.assertion.exact = Some(message.into());
        self
    }

    /// Assert that the diagnostic contains the given string.
    pub fn error(mut self, contains: impl Into<String>) -> Self {
        self.assertion.error = Some(contains.into());
        self
    }

    /// Assert that the diagnostic matches the given regex.
    pub fn error_matches(mut self, pattern: impl Into<String>) -> Self {
        self.assertion.error_pattern = Some(pattern.into());
        self
    }
}

fn kind_of(err: &ValidationError) -> ErrorKind {
    match err {
        ValidationError::InvalidValue { .. } => ErrorKind::InvalidValue,
        ValidationError::MissingRequired { .. } => ErrorKind::MissingRequired,
        ValidationError::MissingRequiredList { .. } => ErrorKind::MissingRequiredList,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_number() -> ValidationResult<()> {
        Err(ValidationError::invalid_value(
            "Number",
            "Value 55asdg64 contains invalid char a",
        ))
    }

    #[test]
    fn test_valid_assertion() {
        let assertion = AssertionBuilder::new().valid().build();

        assert!(assertion.verify("ok", &Ok(())).is_ok());
        assert!(assertion.verify("bad", &invalid_number()).is_err());
    }

    #[test]
    fn test_error_assertions() {
        let assertion = AssertionBuilder::new()
            .field("Number")
            .invalid_value()
            .error("invalid char a")
            .error_matches(r"^Field \w+: Value \S+ contains")
            .build();

        assert!(assertion.verify("number", &invalid_number()).is_ok());
        // An error assertion never accepts a valid record
        assert!(assertion.verify("number", &Ok(())).is_err());
    }

    #[test]
    fn test_field_mismatch_reported() {
        let assertion = AssertionBuilder::new().field("Other").build();

        let err = assertion.verify("number", &invalid_number()).unwrap_err();
        assert!(err.to_string().contains("field mismatch"));
    }

    #[test]
    fn test_kind_mismatch_reported() {
        let assertion = AssertionBuilder::new().missing_required_list().build();
        let result = Err(ValidationError::missing_required("Thing"));

        assert!(assertion.verify("thing", &result).is_err());
    }
}
