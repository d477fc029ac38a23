//! Tracing setup keyed on the resolved debug flag.

use tracing_subscriber::EnvFilter;

use tracker_core::constants::LOG_TARGET;

/// Install the global tracing subscriber.
///
/// Debug mode lowers the agent's target to `debug`; otherwise only warnings
/// surface. An explicit `RUST_LOG` wins over both. Safe to call more than
/// once — later calls are no-ops.
pub fn init(debug: bool) {
    let default_directive = if debug {
        format!("{LOG_TARGET}=debug")
    } else {
        format!("{LOG_TARGET}=warn")
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
