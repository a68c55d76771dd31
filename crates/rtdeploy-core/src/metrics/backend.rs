use std::sync::Arc;

/// Result of one swarm round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Success,
    Failure,
}

impl CallOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            CallOutcome::Success => "success",
            CallOutcome::Failure => "failure",
        }
    }
}

/// Metrics sink for the deploy layer.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record a completed swarm call.
    ///
    /// # Arguments
    /// - `op`: swarm operation (`create_service`, `list_tasks`, ...)
    /// - `outcome`: whether the call succeeded
    /// - `duration_ms`: wall time of the round trip
    fn record_call(&self, op: &str, outcome: CallOutcome, duration_ms: u64);

    /// Record a failed swarm call by error kind.
    ///
    /// Called in addition to `record_call` with [`CallOutcome::Failure`].
    fn record_backend_error(&self, op: &str, error_kind: &str);

    /// Record tasks left out of an instance listing because no address
    /// on the runtime network could be resolved.
    fn record_instances_dropped(&self, count: u64);
}

/// Shared handle to metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
