//! Tracing subscriber setup
//!
//! Filter comes from `RUST_LOG` when set, otherwise from the caller's default
//! (e.g. `"info"` or `"lot_core=debug,info"`).

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// Returns `false` if a global subscriber was already installed, so tests and
/// embedding applications can call this freely.
pub fn init_logging(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
