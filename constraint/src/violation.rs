//! Single-value verdicts and violation types.

use std::fmt;

/// Which clause a value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Value is not a member of the allow list.
    NotAllowed,
    /// Value contains a character outside `good_chars` or inside `bad_chars`.
    InvalidChar(char),
    /// Value does not contain a match for the pattern, or the pattern is malformed.
    PatternMismatch,
}

/// A clause violation for a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The clause that was violated.
    pub kind: ViolationKind,
    /// Human-readable message describing the violation.
    pub message: String,
}

impl Violation {
    /// Value not in the allow list.
    ///
    /// There is no space between the value and "not". Consumers parse this
    /// string, so the format stays as is.
    pub fn not_allowed(value: &str, allow: &str) -> Self {
        Self {
            kind: ViolationKind::NotAllowed,
            message: format!("Value {}not in {}", value, allow),
        }
    }

    /// Value contains a disallowed character.
    pub fn invalid_char(value: &str, ch: char) -> Self {
        Self {
            kind: ViolationKind::InvalidChar(ch),
            message: format!("Value {} contains invalid char {}", value, ch),
        }
    }

    /// Value does not match the pattern.
    pub fn pattern_mismatch(value: &str, pattern: &str) -> Self {
        Self {
            kind: ViolationKind::PatternMismatch,
            message: format!("Value {} does not match {}", value, pattern),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of checking one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Violation),
}

impl Verdict {
    /// Check if the value passed every clause.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The failure reason, or `""` when valid.
    pub fn reason(&self) -> &str {
        match self {
            Verdict::Valid => "",
            Verdict::Invalid(violation) => &violation.message,
        }
    }

    /// The violation, if any.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(violation) => Some(violation),
        }
    }

    /// Split into the `(valid, reason)` pair. The reason is empty iff valid.
    pub fn into_parts(self) -> (bool, String) {
        match self {
            Verdict::Valid => (true, String::new()),
            Verdict::Invalid(violation) => (false, violation.message),
        }
    }
}

impl From<Violation> for Verdict {
    fn from(violation: Violation) -> Self {
        Verdict::Invalid(violation)
    }
}
