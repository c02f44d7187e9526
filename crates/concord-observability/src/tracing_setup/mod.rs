//! Tracing setup: structured logging with named event types.

pub mod events;

use std::sync::Once;

use concord_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "CONCORD_LOG";

/// Initialize the tracing subscriber.
///
/// `CONCORD_LOG` takes precedence over `config.log_level`, e.g.
/// `CONCORD_LOG=concord_consensus=debug,concord_embeddings=warn`.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // try_init: a host application may already own the global subscriber.
        let result = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true))
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
