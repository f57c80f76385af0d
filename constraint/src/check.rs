//! The single-value validator.

use regex::Regex;

use crate::violation::{Verdict, Violation};

/// Check one value against the four string clauses.
///
/// Each clause is ignored when empty. Clauses run in a fixed order and the
/// first failure wins:
/// - `allow` is a comma-separated list of the only permitted values.
/// - `good_chars` holds the only characters the value may contain.
/// - `bad_chars` holds characters the value must not contain.
/// - `pattern` is a regex the value must contain a match for. Matching is a
///   search, not a full match, and a malformed pattern fails every value.
pub fn check_value(
    value: &str,
    allow: &str,
    good_chars: &str,
    bad_chars: &str,
    pattern: &str,
) -> Verdict {
    ValueChecker::new(allow, good_chars, bad_chars, pattern).check(value)
}

/// Tuple form of [`check_value`]: `(valid, reason)`, reason empty iff valid.
pub fn is_valid(
    value: &str,
    allow: &str,
    good_chars: &str,
    bad_chars: &str,
    pattern: &str,
) -> (bool, String) {
    check_value(value, allow, good_chars, bad_chars, pattern).into_parts()
}

/// The four clauses with the pattern compiled once, for checking many values.
#[derive(Debug, Clone)]
pub struct ValueChecker<'a> {
    allow: &'a str,
    good_chars: &'a str,
    bad_chars: &'a str,
    pattern: &'a str,
    /// `None` when the pattern is empty or does not compile.
    regex: Option<Regex>,
}

impl<'a> ValueChecker<'a> {
    pub fn new(allow: &'a str, good_chars: &'a str, bad_chars: &'a str, pattern: &'a str) -> Self {
        let regex = if pattern.is_empty() {
            None
        } else {
            Regex::new(pattern).ok()
        };

        Self {
            allow,
            good_chars,
            bad_chars,
            pattern,
            regex,
        }
    }

    /// Whether the match clause is set but does not compile.
    pub fn has_malformed_pattern(&self) -> bool {
        !self.pattern.is_empty() && self.regex.is_none()
    }

    /// Check one value. Same rules as [`check_value`].
    pub fn check(&self, value: &str) -> Verdict {
        if !self.allow.is_empty() && !self.allow.split(',').any(|allowed| allowed == value) {
            return Violation::not_allowed(value, self.allow).into();
        }

        if !self.good_chars.is_empty() {
            if let Some(ch) = value.chars().find(|c| !self.good_chars.contains(*c)) {
                return Violation::invalid_char(value, ch).into();
            }
        }

        if !self.bad_chars.is_empty() {
            if let Some(ch) = value.chars().find(|c| self.bad_chars.contains(*c)) {
                return Violation::invalid_char(value, ch).into();
            }
        }

        // Compile errors count as a miss.
        if !self.pattern.is_empty()
            && !self.regex.as_ref().map_or(false, |re| re.is_match(value))
        {
            return Violation::pattern_mismatch(value, self.pattern).into();
        }

        Verdict::Valid
    }
}
