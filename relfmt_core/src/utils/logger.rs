//! Logging setup for relfmt front ends.
//!
//! The library only emits `tracing` events; binaries call [`init_logging`]
//! once to send them to stderr.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - standard `tracing-subscriber` filter
//! - `RELFMT_DEBUG=1` - same as `--debug`; overrides `RUST_LOG`

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

/// Environment variable enabling debug output.
pub const DEBUG_ENV: &str = "RELFMT_DEBUG";

static LOGGER_INSTALLED: OnceLock<bool> = OnceLock::new();

/// Check if debug mode is requested through `RELFMT_DEBUG`.
pub fn is_debug_enabled() -> bool {
    std::env::var(DEBUG_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// An explicit debug request wins over `RUST_LOG`, which wins over `warn`.
fn filter_directive(debug: bool) -> String {
    if debug {
        return "debug".to_string();
    }
    std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

/// Install the global stderr subscriber.
///
/// Safe to call more than once: only the first call installs anything, and
/// the return value says whether this process has a subscriber from us.
pub fn init_logging(debug: bool) -> bool {
    *LOGGER_INSTALLED.get_or_init(|| {
        let debug = debug || is_debug_enabled();
        let filter = EnvFilter::try_new(filter_directive(debug))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .is_ok()
    })
}
