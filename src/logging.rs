//! Logging configuration using tracing
//!
//! Diagnostics go to stderr so that stdout only carries the confirmation
//! line. Filtering follows `RUST_LOG` when it is set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `default_level` applies when `RUST_LOG` is unset or invalid, e.g.
/// `"warn"` for normal runs and `"debug"` for `--verbose`.
///
/// # Errors
/// Returns an error if a subscriber has already been installed
pub fn init(default_level: &str) -> crate::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .map_err(|e| crate::Error::Logging(format!("Failed to initialize tracing: {}", e)))
}
