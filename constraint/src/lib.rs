//! Fieldguard Constraint
//!
//! The single-value validator: checks one text value against the `allow`,
//! `good_chars`, `bad_chars` and `match` clauses.
//!
//! # Module Structure
//!
//! - `check` - `check_value`, its tuple form `is_valid`, and `ValueChecker`
//! - `violation` - Verdict and violation types

mod check;
mod violation;

pub use check::{check_value, is_valid, ValueChecker};
pub use violation::{Verdict, Violation, ViolationKind};
