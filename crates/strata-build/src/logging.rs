//! Logging bootstrap, available with the `logging` feature.
//!
//! strata emits tracing events only; library consumers install their own
//! subscriber. These helpers cover the common binary case.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install a global subscriber with the given filter directives
/// (e.g. `"info"` or `"strata_build=debug"`).
///
/// Only the first call per process takes effect; invalid directives fall
/// back to `info`.
pub fn init_logging(directives: &str) {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

/// Install a global subscriber filtered from `RUST_LOG`, falling back to
/// `info` when unset or invalid.
pub fn init_logging_from_env() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter);
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                // Let consumers control timestamp format
                fmt::layer().compact().with_target(false).without_time(),
            )
            .init();
    });
}
