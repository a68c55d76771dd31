use thiserror::Error;

use rtdeploy_model::ModelError;
use rtdeploy_swarm::SwarmError;

#[derive(Debug, Error)]
pub enum DeployError {
    /// Any failure reported by the swarm client. Never retried.
    #[error("deployment backend failure: {0}")]
    Backend(#[from] SwarmError),

    #[error("cannot decode service '{service}': {source}")]
    Decode {
        service: String,
        #[source]
        source: ModelError,
    },

    #[error("operation not supported yet: {0}")]
    Unsupported(&'static str),
}
