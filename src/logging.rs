//! Diagnostic logging to stderr.
//!
//! Stdout carries hook output and banners, so log lines never go there.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding the log filter, e.g. `HUSKY_LOG=debug`.
pub const LOG_ENV: &str = "HUSKY_LOG";

const DEFAULT_FILTER: &str = "husky_hook=warn";

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
