//! Subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset, empty or unparsable.
pub const DEFAULT_FILTER: &str = "gorillas=info";

/// Build the filter from `RUST_LOG`-style directives. The directives replace
/// the default wholesale, so `gorillas=debug` really logs at debug.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the fmt subscriber, filtered by `RUST_LOG`.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter(directives.as_deref()))
        .init();
}
