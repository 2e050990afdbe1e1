//! Log output setup.

use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber that writes to stderr, filtered by
/// `RUST_LOG` (default `info`).
///
/// Returns `false` if a subscriber was already installed, which leaves
/// the existing one in place.
pub fn init_logging() -> bool {
    init_logging_with("info")
}

/// Like [`init_logging`], with `default` used when `RUST_LOG` is unset
/// or unparsable.
pub fn init_logging_with(default: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
