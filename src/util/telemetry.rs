//! Tracing bootstrap for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Install the default env-filtered fmt subscriber unless one is already set.
/// Safe to call repeatedly; later calls are no-ops.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
