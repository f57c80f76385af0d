//! Fieldguard Scenario Harness
//!
//! Provides a fluent API for writing validation scenarios.
//!
//! A scenario names a schema (built inline or loaded from `fixtures/`), a
//! base record, and a list of steps. Each step layers its own values over
//! the base record, validates the result, and checks an assertion.
//!
//! # Example
//!
//! ```ignore
//! use fieldguard_tests::prelude::*;
//!
//! Scenario::new("number")
//!     .schema_file("valid.json")
//!     .base(record! { Required: "test", Number: "5564" })
//!     .step("letters", record! { Number: "55asdg64" }, |a| a.field("Number").error("invalid char a"))
//!     .run()
//!     .unwrap();
//! ```

mod assertion;
mod loader;

pub use assertion::{Assertion, AssertionBuilder, ErrorKind};
pub use error::{HarnessError, HarnessResult};
pub use loader::load_schema;
pub use scenario::{Scenario, Step};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder};
    pub use crate::error::{HarnessError, HarnessResult};
    pub use crate::record;
    pub use crate::scenario::Scenario;
    pub use fieldguard::{FieldData, Fields};
}

// Must be public for the record! macro to work from external crates
#[doc(hidden)]
pub use fieldguard as __fieldguard;

/// Macro for creating record values keyed by field identifier.
///
/// # Example
///
/// ```ignore
/// use fieldguard_tests::prelude::*;
///
/// let fields = record! { Required: "test", Thing: ["thing", "thing2"] };
/// ```
#[macro_export]
macro_rules! record {
    { $($key:ident : $value:expr),* $(,)? } => {{
        #[allow(unused_mut)]
        let mut fields = $crate::__fieldguard::Fields::new();
        $(
            fields.insert(stringify!($key).to_string(), $crate::__fieldguard::FieldData::from($value));
        )*
        fields
    }};
}
