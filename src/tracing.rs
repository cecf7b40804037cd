//! Tracing subscriber setup for the binary and for tests.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install the tracing subscriber. Calling this more than once is a no-op.
///
/// Under a test runner the default level drops to `debug` and output goes
/// through the per-test capture writer; otherwise logs go to stderr at `info`.
/// `RUST_LOG` overrides the default either way.
pub fn init() {
    INIT.call_once(|| {
        let under_test = std::env::var_os("NEXTEST").is_some()
            || std::env::var_os("CARGO_TARGET_TMPDIR").is_some();
        let default_level = if under_test { "debug" } else { "info" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact();

        if under_test {
            // The guard must live for the whole process, not this scope.
            std::mem::forget(builder.with_test_writer().finish().set_default());
        } else if let Err(e) = builder.with_writer(std::io::stderr).try_init() {
            eprintln!("Failed to initialize tracing: {e}");
        }
    });
}
