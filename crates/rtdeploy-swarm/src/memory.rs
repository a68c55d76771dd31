//! In-process swarm used by tests and the demo binary.
//!
//! Creating a service immediately schedules its replicas as `running` tasks,
//! one address per requested network. Services that request no network are
//! attached to [`INGRESS_NETWORK`] only, like a real swarm does. Name filters
//! match by prefix, as the engine's `name` filter does.
use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::{
    ServiceFilter, SwarmClient, SwarmError, TaskFilter,
    model::{
        ContainerStatus, NetworkAttachment, Service, ServiceMode, ServiceSpec, Task, TaskStatus,
    },
};

/// Network every swarm task is attached to for the routing mesh.
pub const INGRESS_NETWORK: &str = "ingress";

#[derive(Default)]
struct State {
    services: Vec<Service>,
    tasks: Vec<Task>,
    /// Error returned by the next call, then cleared.
    next_failure: Option<SwarmError>,
}

/// Swarm control plane kept entirely in memory.
#[derive(Default)]
pub struct InMemorySwarm {
    state: Mutex<State>,
    seq: AtomicU64,
}

impl InMemorySwarm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next client call fail with `err`.
    pub fn fail_next(&self, err: SwarmError) {
        if let Ok(mut st) = self.state.lock() {
            st.next_failure = Some(err);
        }
    }

    /// Store a service as-is, bypassing validation and scheduling.
    pub fn insert_service(&self, service: Service) {
        if let Ok(mut st) = self.state.lock() {
            st.services.push(service);
        }
    }

    /// Store a task as-is.
    pub fn insert_task(&self, task: Task) {
        if let Ok(mut st) = self.state.lock() {
            st.tasks.push(task);
        }
    }

    /// Number of stored services.
    pub fn service_count(&self) -> usize {
        self.state.lock().map(|st| st.services.len()).unwrap_or(0)
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}{:012x}", self.seq.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Lock state and consume a pending injected failure.
    fn begin(&self) -> Result<MutexGuard<'_, State>, SwarmError> {
        let mut st = self
            .state
            .lock()
            .map_err(|_| SwarmError::Unavailable("state lock poisoned".into()))?;
        if let Some(err) = st.next_failure.take() {
            return Err(err);
        }
        Ok(st)
    }

    fn schedule(&self, service_id: &str, spec: &ServiceSpec) -> Vec<Task> {
        let replicas = match &spec.mode {
            ServiceMode::Replicated(r) => r.replicas.unwrap_or(1),
            ServiceMode::Global {} => 1,
        };

        let mut networks: Vec<&str> = spec.networks.iter().map(|n| n.target.as_str()).collect();
        if networks.is_empty() {
            networks.push(INGRESS_NETWORK);
        }

        (0..replicas)
            .map(|slot| {
                let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
                let attachments = networks
                    .iter()
                    .enumerate()
                    .map(|(net, name)| {
                        let addr = format!("10.{net}.{}.{}/24", (seq >> 8) & 0xff, seq & 0xff);
                        NetworkAttachment::new(*name, [addr])
                    })
                    .collect();

                Task {
                    id: format!("task{seq:012x}"),
                    service_id: service_id.to_string(),
                    labels: spec.task_template.container_spec.labels.clone(),
                    status: TaskStatus {
                        state: "running".into(),
                        message: Some(format!("started replica {}", slot + 1)),
                        container_status: Some(ContainerStatus {
                            container_id: Some(format!("ctr{seq:012x}")),
                        }),
                    },
                    network_attachments: attachments,
                }
            })
            .collect()
    }
}

#[async_trait]
impl SwarmClient for InMemorySwarm {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    async fn create_service(&self, spec: &ServiceSpec) -> Result<String, SwarmError> {
        let mut st = self.begin()?;

        if spec.name.trim().is_empty() {
            return Err(SwarmError::InvalidSpec("service name is empty".into()));
        }
        if spec.task_template.container_spec.image.trim().is_empty() {
            return Err(SwarmError::InvalidSpec("container image is empty".into()));
        }
        if st.services.iter().any(|s| s.spec.name == spec.name) {
            return Err(SwarmError::Conflict(spec.name.clone()));
        }

        let id = self.next_id("svc");
        let tasks = self.schedule(&id, spec);
        debug!(service = %spec.name, id = %id, tasks = tasks.len(), "service created");

        st.services.push(Service {
            id: id.clone(),
            spec: spec.clone(),
            update_status: None,
        });
        st.tasks.extend(tasks);
        Ok(id)
    }

    async fn list_services(&self, filter: &ServiceFilter) -> Result<Vec<Service>, SwarmError> {
        let st = self.begin()?;
        let out: Vec<Service> = st
            .services
            .iter()
            .filter(|s| {
                filter
                    .name
                    .as_deref()
                    .is_none_or(|name| s.spec.name.starts_with(name))
            })
            .cloned()
            .collect();
        trace!(?filter, found = out.len(), "services listed");
        Ok(out)
    }

    async fn remove_service(&self, id: &str) -> Result<(), SwarmError> {
        let mut st = self.begin()?;
        let before = st.services.len();
        st.services.retain(|s| s.id != id);
        if st.services.len() == before {
            return Err(SwarmError::NotFound(id.to_string()));
        }
        st.tasks.retain(|t| t.service_id != id);
        debug!(id = %id, "service removed");
        Ok(())
    }

    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, SwarmError> {
        let st = self.begin()?;
        let owner_ids: Option<Vec<&str>> = filter.service.as_deref().map(|wanted| {
            st.services
                .iter()
                .filter(|s| s.spec.name == wanted || s.id == wanted)
                .map(|s| s.id.as_str())
                .collect()
        });

        let out: Vec<Task> = st
            .tasks
            .iter()
            .filter(|t| {
                owner_ids
                    .as_ref()
                    .is_none_or(|ids| ids.contains(&t.service_id.as_str()))
            })
            .cloned()
            .collect();
        trace!(?filter, found = out.len(), "tasks listed");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContainerSpec, NetworkAttachmentConfig, TaskSpec};

    fn spec(name: &str, replicas: u64, network: Option<&str>) -> ServiceSpec {
        ServiceSpec {
            name: name.into(),
            task_template: TaskSpec {
                container_spec: ContainerSpec {
                    image: "busybox".into(),
                    ..Default::default()
                },
            },
            mode: ServiceMode::replicated(Some(replicas)),
            networks: network
                .map(|n| vec![NetworkAttachmentConfig::new(n)])
                .unwrap_or_default(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_schedules_replicas_on_requested_network() {
        let swarm = InMemorySwarm::new();
        let id = swarm
            .create_service(&spec("a", 3, Some("overlay")))
            .await
            .unwrap();

        let tasks = swarm.list_tasks(&TaskFilter::by_service("a")).await.unwrap();
        assert_eq!(tasks.len(), 3);
        for t in &tasks {
            assert_eq!(t.service_id, id);
            assert_eq!(t.network_attachments[0].network_name(), "overlay");
        }
    }

    #[tokio::test]
    async fn service_without_network_lands_on_ingress() {
        let swarm = InMemorySwarm::new();
        swarm.create_service(&spec("a", 1, None)).await.unwrap();

        let tasks = swarm.list_tasks(&TaskFilter::all()).await.unwrap();
        assert_eq!(tasks[0].network_attachments[0].network_name(), INGRESS_NETWORK);
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let swarm = InMemorySwarm::new();
        swarm.create_service(&spec("a", 1, None)).await.unwrap();
        let err = swarm.create_service(&spec("a", 1, None)).await.unwrap_err();
        assert!(matches!(err, SwarmError::Conflict(name) if name == "a"));
    }

    #[tokio::test]
    async fn remove_drops_service_and_tasks() {
        let swarm = InMemorySwarm::new();
        let id = swarm.create_service(&spec("a", 2, None)).await.unwrap();
        swarm.create_service(&spec("b", 1, None)).await.unwrap();

        swarm.remove_service(&id).await.unwrap();
        assert_eq!(swarm.service_count(), 1);
        assert_eq!(swarm.list_tasks(&TaskFilter::all()).await.unwrap().len(), 1);

        let err = swarm.remove_service(&id).await.unwrap_err();
        assert!(matches!(err, SwarmError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_services_name_filter_matches_prefix() {
        let swarm = InMemorySwarm::new();
        swarm.create_service(&spec("mnist", 1, None)).await.unwrap();
        swarm.create_service(&spec("mnist-v2", 1, None)).await.unwrap();

        let found = swarm
            .list_services(&ServiceFilter::by_name("mnist"))
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        let found = swarm
            .list_services(&ServiceFilter::by_name("mnist-v"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].spec.name, "mnist-v2");
        assert!(
            swarm
                .list_services(&ServiceFilter::by_name("iris"))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn injected_failure_hits_only_next_call() {
        let swarm = InMemorySwarm::new();
        swarm.fail_next(SwarmError::Unavailable("connection refused".into()));

        assert!(swarm.list_services(&ServiceFilter::all()).await.is_err());
        assert!(swarm.list_services(&ServiceFilter::all()).await.is_ok());
    }
}
