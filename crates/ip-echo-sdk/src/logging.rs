//! Tracing setup shared by the worker and Lambda entry points

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,ip_echo=debug";

/// Install the global subscriber.
///
/// Output goes to stderr because the worker protocol owns stdout. Calling
/// this more than once is harmless; later calls leave the first subscriber
/// in place.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
