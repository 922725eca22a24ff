//! Process setup for the facade's own diagnostics.
//!
//! The facade reports registry swaps and context attachment through `tracing`.
//! Hosts that want to see those events call [`init`] once at startup.

use logbridge_core::Level;

/// Tracing subscriber setup (filters, output format).
pub mod tracing;

/// Initialize process-wide tracing with `threshold` as the fallback filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(threshold: Level) {
    tracing::init(threshold);
}
