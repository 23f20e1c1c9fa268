//! Tracing initialization for hosts embedding the engine.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `RCA_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "rca_causal=info,rca_core=info";

/// Initialize logging for the forest engine.
///
/// Reads `RCA_LOG` for per-module levels, e.g.
/// `RCA_LOG=rca_causal::store=debug,rca_causal::sync=info`.
///
/// Idempotent. If the host already installed a global subscriber, that one is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("RCA_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
