//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "GUNGHAP_LOG";

/// Install a stderr `fmt` subscriber once per process.
///
/// Reads `GUNGHAP_LOG` (e.g. `GUNGHAP_LOG=gunghap_core=debug`), falling back
/// to `gunghap_core=info` when unset or unparseable.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("gunghap_core=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
