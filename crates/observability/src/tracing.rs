//! Tracing subscriber initialization.
//!
//! JSON output with timestamps. `RUST_LOG` wins when set; otherwise the filter
//! follows the facade level handed to [`init`].

use logbridge_core::Level;
use tracing_subscriber::EnvFilter;

/// Tracing filter directive equivalent to a facade level.
///
/// Unnamed ordinals behave like `OFF`, matching how they render.
pub fn level_directive(level: Level) -> &'static str {
    match level {
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
        _ => "off",
    }
}

/// Filter used by [`init`]: `RUST_LOG` if it parses, else `threshold`.
pub fn filter_for(threshold: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_directive(threshold)))
}

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(threshold: Level) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(threshold))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
