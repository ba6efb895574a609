//! One-time tracing initialization for tests.

/// Installs the fmt subscriber once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt::try_init();
}
