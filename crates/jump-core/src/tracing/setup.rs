//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "JUMP_LOG";

/// Initialize the jump tracing/logging system on stderr.
///
/// `JUMP_LOG` wins when set and valid (e.g. `JUMP_LOG=jump_store=debug`).
/// Otherwise `default_level` applies to every target, falling back to
/// `info` if it does not parse.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(default_level == "debug" || default_level == "trace")
                    .with_line_number(default_level == "debug" || default_level == "trace"),
            )
            .with(filter)
            .init();
    });
}
