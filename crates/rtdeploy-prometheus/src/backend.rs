use std::sync::Arc;

use prometheus::{
    Counter, CounterVec, HistogramOpts, HistogramVec, Opts, Registry, proto::MetricFamily,
};

use rtdeploy_core::{CallOutcome, MetricsBackend};

const NAMESPACE: &str = "rtdeploy";

/// Prometheus metrics backend.
///
/// Label values are bounded:
/// - `op`: the swarm operations (`create_service`, `list_services`, `remove_service`, `list_tasks`)
/// - `outcome`: "success", "failure"
/// - `error_kind`: "conflict", "not_found", "invalid_spec", "api", "unavailable"
#[derive(Clone)]
pub struct PrometheusMetrics {
    calls: CounterVec,
    call_duration: HistogramVec,
    errors: CounterVec,
    instances_dropped: Counter,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Register collectors in the given registry.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let calls = CounterVec::new(
            Opts::new("swarm_calls_total", "Swarm API calls by operation and outcome")
                .namespace(NAMESPACE),
            &["op", "outcome"],
        )?;
        registry.register(Box::new(calls.clone()))?;

        let call_duration = HistogramVec::new(
            HistogramOpts::new(
                "swarm_call_duration_seconds",
                "Swarm API call latency in seconds",
            )
            .namespace(NAMESPACE)
            .buckets(vec![0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["op"],
        )?;
        registry.register(Box::new(call_duration.clone()))?;

        let errors = CounterVec::new(
            Opts::new("swarm_errors_total", "Failed swarm API calls by error kind")
                .namespace(NAMESPACE),
            &["op", "error_kind"],
        )?;
        registry.register(Box::new(errors.clone()))?;

        let instances_dropped = Counter::with_opts(
            Opts::new(
                "instances_dropped_total",
                "Tasks left out of instance listings for lack of a network address",
            )
            .namespace(NAMESPACE),
        )?;
        registry.register(Box::new(instances_dropped.clone()))?;

        Ok(Self {
            calls,
            call_duration,
            errors,
            instances_dropped,
            registry,
        })
    }

    /// Register collectors in a fresh registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_call(&self, op: &str, outcome: CallOutcome, duration_ms: u64) {
        self.calls
            .with_label_values(&[op, outcome.as_label()])
            .inc();
        self.call_duration
            .with_label_values(&[op])
            .observe(duration_ms as f64 / 1000.0);
    }

    fn record_backend_error(&self, op: &str, error_kind: &str) {
        self.errors.with_label_values(&[op, error_kind]).inc();
    }

    fn record_instances_dropped(&self, count: u64) {
        self.instances_dropped.inc_by(count as f64);
    }
}
