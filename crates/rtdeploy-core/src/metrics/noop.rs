use crate::metrics::backend::{CallOutcome, MetricsBackend};

/// Metrics backend that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_call(&self, _: &str, _: CallOutcome, _: u64) {}

    #[inline(always)]
    fn record_backend_error(&self, _: &str, _: &str) {}

    #[inline(always)]
    fn record_instances_dropped(&self, _: u64) {}
}
