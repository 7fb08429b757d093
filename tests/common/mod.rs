//! Common utilities for the integration test suites.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the tracing subscriber for test runs, once per process.
///
/// Honors `RUST_LOG`; silent by default so test output stays clean.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
