//! Prometheus metrics backend for the rtdeploy deploy layer.
//!
//! [`PrometheusMetrics`] implements [`rtdeploy_core::MetricsBackend`] and
//! keeps its collectors in a [`prometheus::Registry`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use rtdeploy_core::{DeployConfig, DeployService};
//! use rtdeploy_prometheus::PrometheusMetrics;
//! use rtdeploy_swarm::InMemorySwarm;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let service = DeployService::new(Arc::new(InMemorySwarm::new()), DeployConfig::default())
//!     .with_metrics(Arc::new(metrics.clone()));
//! # let _ = service;
//!
//! // let families = metrics.gather();
//! // prometheus::TextEncoder::new().encode(&families, &mut buffer)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `rtdeploy_swarm_calls_total{op, outcome}` - Counter
//! - `rtdeploy_swarm_call_duration_seconds{op}` - Histogram
//! - `rtdeploy_swarm_errors_total{op, error_kind}` - Counter
//! - `rtdeploy_instances_dropped_total` - Counter
//!
//! No `/metrics` HTTP endpoint is provided; encode [`PrometheusMetrics::gather`]
//! output from whatever server the application already runs.
mod backend;

pub use backend::PrometheusMetrics;
