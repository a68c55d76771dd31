//! Runtime deployment façade over a [`SwarmClient`].
//! - Builds service specs from runtimes and submits them.
//! - Reads services and tasks back into runtimes and instances.
//! - Wraps every client failure into [`DeployError::Backend`].
use std::{future::Future, sync::Arc, time::Instant};

use tracing::{debug, info, instrument, warn};

use rtdeploy_model::{Runtime, RuntimeInstance};
use rtdeploy_swarm::{ServiceFilter, SwarmClient, SwarmError, TaskFilter, model::Service};

use crate::{
    config::DeployConfig,
    error::DeployError,
    map::{to_instances, to_runtime, to_service_spec},
    metrics::{CallOutcome, MetricsHandle, noop_metrics},
};

/// Deploys runtimes as swarm services and inspects them.
///
/// Every operation is a sequence of awaited client calls. Nothing is cached
/// and nothing is retried; concurrent updates are arbitrated by the swarm.
pub struct DeployService {
    client: Arc<dyn SwarmClient>,
    config: DeployConfig,
    metrics: MetricsHandle,
}

impl DeployService {
    pub fn new(client: Arc<dyn SwarmClient>, config: DeployConfig) -> Self {
        Self {
            client,
            config,
            metrics: noop_metrics(),
        }
    }

    /// Replace the metrics backend.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    /// Create the service for `runtime` and return its id.
    #[instrument(level = "debug", skip(self, runtime), fields(runtime = %runtime.name))]
    pub async fn deploy(&self, runtime: &Runtime) -> Result<String, DeployError> {
        let spec = to_service_spec(runtime, self.config.attach_network());
        let id = self
            .call("create_service", self.client.create_service(&spec))
            .await?;

        info!(id = %id, image = %runtime.image_name, "runtime deployed");
        Ok(id)
    }

    /// Look a runtime up by exact name.
    ///
    /// `Ok(None)` when no service has that name. The client's name filter may
    /// also return services whose name only starts with `name`; those are
    /// skipped here.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_runtime(&self, name: &str) -> Result<Option<Runtime>, DeployError> {
        let services = self
            .call(
                "list_services",
                self.client.list_services(&ServiceFilter::by_name(name)),
            )
            .await?;

        let exact: Vec<&Service> = services.iter().filter(|s| s.spec.name == name).collect();
        if exact.len() > 1 {
            warn!(matches = exact.len(), "several services share a name, using first");
        }
        let Some(service) = exact.first() else {
            debug!("runtime not found");
            return Ok(None);
        };
        decode(service).map(Some)
    }

    /// Remove the service with the given id.
    #[instrument(level = "debug", skip(self))]
    pub async fn delete_runtime(&self, id: &str) -> Result<(), DeployError> {
        self.call("remove_service", self.client.remove_service(id))
            .await?;
        info!("runtime deleted");
        Ok(())
    }

    /// Live instances of the named runtime.
    #[instrument(level = "debug", skip(self))]
    pub async fn runtime_instances_of(
        &self,
        name: &str,
    ) -> Result<Vec<RuntimeInstance>, DeployError> {
        self.instances(TaskFilter::by_service(name)).await
    }

    /// Live instances of every runtime in the cluster.
    #[instrument(level = "debug", skip(self))]
    pub async fn runtime_instances(&self) -> Result<Vec<RuntimeInstance>, DeployError> {
        self.instances(TaskFilter::all()).await
    }

    /// Every service in the cluster, decoded as runtimes.
    ///
    /// One undecodable service fails the whole listing.
    #[instrument(level = "debug", skip(self))]
    pub async fn runtime_list(&self) -> Result<Vec<Runtime>, DeployError> {
        let services = self
            .call("list_services", self.client.list_services(&ServiceFilter::all()))
            .await?;
        services.iter().map(decode).collect()
    }

    /// Change the replica count of a runtime.
    ///
    /// Not wired to the swarm update API yet; always returns
    /// [`DeployError::Unsupported`] so callers can tell it was not applied.
    #[instrument(level = "debug", skip(self))]
    pub async fn scale(&self, name: &str, scale: u64) -> Result<(), DeployError> {
        warn!("scale requested but not supported");
        Err(DeployError::Unsupported("scale"))
    }

    async fn instances(&self, filter: TaskFilter) -> Result<Vec<RuntimeInstance>, DeployError> {
        let tasks = self
            .call("list_tasks", self.client.list_tasks(&filter))
            .await?;

        let network = self.config.instance_network();
        let instances = to_instances(&tasks, network);

        let dropped = tasks.len() - instances.len();
        if dropped > 0 {
            debug!(dropped, network, "tasks without address on runtime network skipped");
            self.metrics.record_instances_dropped(dropped as u64);
        }
        Ok(instances)
    }

    /// Await one client call, recording metrics and wrapping its error.
    async fn call<T, F>(&self, op: &'static str, fut: F) -> Result<T, DeployError>
    where
        F: Future<Output = Result<T, SwarmError>>,
    {
        let started = Instant::now();
        let res = fut.await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match res {
            Ok(v) => {
                self.metrics
                    .record_call(op, CallOutcome::Success, elapsed_ms);
                Ok(v)
            }
            Err(e) => {
                self.metrics
                    .record_call(op, CallOutcome::Failure, elapsed_ms);
                self.metrics.record_backend_error(op, e.kind());
                warn!(op, client = self.client.name(), error = %e, "swarm call failed");
                Err(DeployError::Backend(e))
            }
        }
    }
}

fn decode(service: &Service) -> Result<Runtime, DeployError> {
    to_runtime(service).map_err(|source| DeployError::Decode {
        service: service.spec.name.clone(),
        source,
    })
}
