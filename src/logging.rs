use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a log filter, checked before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "COUNTRIES_MVI_LOG";

/// Initialize tracing on stderr.
///
/// The filter comes from `COUNTRIES_MVI_LOG`, then `RUST_LOG`, and
/// defaults to `warn` so rendered states stay readable on stdout.
/// Calling this more than once is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
