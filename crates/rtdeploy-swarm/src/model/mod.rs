//! Swarm objects in Engine API shape (PascalCase JSON field names).
//!
//! Only the fields the deploy core reads or writes are modelled; unknown
//! fields are ignored on deserialization.
mod service;
pub use service::{
    ContainerSpec, EndpointSpec, NetworkAttachmentConfig, ReplicatedService, ResolutionMode,
    Service, ServiceMode, ServiceSpec, TaskSpec, UpdateStatus,
};

mod task;
pub use task::{ContainerStatus, Network, NetworkAttachment, NetworkSpec, Task, TaskStatus};
