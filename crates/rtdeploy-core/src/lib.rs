pub mod config;
pub mod deploy;
pub mod error;
pub mod map;
pub mod metrics;

pub use config::{DEFAULT_NETWORK, DeployConfig};
pub use deploy::DeployService;
pub use error::DeployError;
pub use metrics::{CallOutcome, MetricsBackend, MetricsHandle, NoOpMetrics, noop_metrics};

pub mod prelude {
    pub use crate::config::DeployConfig;
    pub use crate::deploy::DeployService;
    pub use crate::error::DeployError;
    pub use rtdeploy_model::{InstanceStatus, Runtime, RuntimeInstance};
    pub use rtdeploy_swarm::SwarmClient;
}
