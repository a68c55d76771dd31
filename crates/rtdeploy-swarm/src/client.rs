use async_trait::async_trait;

use crate::{
    SwarmError,
    model::{Service, ServiceSpec, Task},
};

/// Service list criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceFilter {
    /// Service name as given to the engine's `name` filter, which also
    /// matches services whose name merely starts with it.
    pub name: Option<String>,
}

impl ServiceFilter {
    /// Match every service.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Task list criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Owning service, by name or id.
    pub service: Option<String>,
}

impl TaskFilter {
    /// Match every task in the cluster.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_service(service: impl Into<String>) -> Self {
        Self {
            service: Some(service.into()),
        }
    }
}

/// Swarm control-plane operations used by the deploy core.
///
/// Implementations own transport, authentication and timeouts. Every call is
/// one remote round trip; failures are reported as [`SwarmError`].
#[async_trait]
pub trait SwarmClient: Send + Sync {
    /// Client name used in logs.
    fn name(&self) -> &'static str;

    /// Create a service and return its id.
    async fn create_service(&self, spec: &ServiceSpec) -> Result<String, SwarmError>;

    async fn list_services(&self, filter: &ServiceFilter) -> Result<Vec<Service>, SwarmError>;

    /// Remove a service by id. Its tasks go with it.
    async fn remove_service(&self, id: &str) -> Result<(), SwarmError>;

    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, SwarmError>;
}
