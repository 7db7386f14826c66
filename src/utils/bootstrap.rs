//! Bootstrap utilities for redblack binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "REDBLACK_LOG";

/// Initialize tracing with REDBLACK_LOG environment variable.
///
/// Defaults to "info" level if REDBLACK_LOG is not set. Set
/// `REDBLACK_LOG=redblack_rbtree=trace` to see every fixup case taken.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
