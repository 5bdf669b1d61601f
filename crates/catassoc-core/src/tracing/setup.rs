//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Default filter used when `CATASSOC_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "catassoc=info";

/// Initialize the catassoc tracing/logging system.
///
/// Reads the `CATASSOC_LOG` environment variable for per-module log levels.
/// Format: `CATASSOC_LOG=catassoc_analysis::matrix=debug,catassoc_analysis::binning=warn`
///
/// Falls back to `catassoc=info` if `CATASSOC_LOG` is not set or is invalid.
///
/// Idempotent. A subscriber installed elsewhere wins; this never panics.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
