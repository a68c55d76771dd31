//! Pure conversions between runtime descriptors and swarm objects.
mod instance;
mod runtime;
mod spec;

pub use instance::{resolve_host, to_instance, to_instances};
pub use runtime::to_runtime;
pub use spec::to_service_spec;
