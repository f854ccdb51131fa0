//! Tracing/logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
