//! Shared helpers for the scenario suites.

use fieldguard_tests::prelude::*;

/// Install a test-writer subscriber once; `RUST_LOG=fieldguard=trace` shows the walk.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The all-valid record for the `Valid` fixture.
pub fn valid_base() -> Fields {
    record! {
        Required: "test",
        Number: "5564",
        NotNumber: "thing isn't",
        Match: "2135",
        Thing: ["thing", "thing2"],
    }
}
