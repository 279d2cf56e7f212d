//! Shared helpers for integration tests.

use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a test-friendly tracing subscriber once per test binary.
///
/// Defaults to `expiring_cache=debug`, overridable with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "expiring_cache=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}
