//! Unified test logging initialization
//!
//! This module provides a unified logging initialization function that can be
//! used across integration test binaries of every workspace crate.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// This function is idempotent and race-safe. It can be called multiple times
/// without panicking. The logging level is controlled in this order of precedence:
///
/// 1. `TEST_LOG` environment variable (preferred)
/// 2. `RUST_LOG` environment variable (fallback)
/// 3. `"warn"` (default, quiet)
///
/// Set `TEST_LOG_FORMAT=json` to get one JSON object per event, matching
/// what the CLI emits with `SCOREKEEPER_LOG_FORMAT=json`.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        // Read log level in order: TEST_LOG -> RUST_LOG -> "warn"
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let json = std::env::var("TEST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

        let builder = fmt()
            .with_env_filter(filter)
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time(); // Stable output

        if json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok(); // Never panic if something else already initialized
        }
    });
}
