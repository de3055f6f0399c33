//! Logging setup.
//!
//! The engine logs through `tracing` and never installs a subscriber on its
//! own. Hosts that do not already have one can call [`init_tracing`].
//!
//! # Example
//!
//! ```ignore
//! holdtrack::telemetry::init_tracing("holdtrack=info");
//! ```

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG`, or by
/// `default_filter` when `RUST_LOG` is unset or invalid.
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
