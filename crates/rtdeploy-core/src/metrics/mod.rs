//! Metrics abstraction for deploy operations.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are
//! injected via [`crate::DeployService::with_metrics`].
mod backend;
pub use backend::{CallOutcome, MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
