use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("service already exists: {0}")]
    Conflict(String),

    #[error("no such service: {0}")]
    NotFound(String),

    #[error("invalid service spec: {0}")]
    InvalidSpec(String),

    #[error("swarm api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("swarm unavailable: {0}")]
    Unavailable(String),
}

impl SwarmError {
    /// Short, low-cardinality name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SwarmError::Conflict(_) => "conflict",
            SwarmError::NotFound(_) => "not_found",
            SwarmError::InvalidSpec(_) => "invalid_spec",
            SwarmError::Api { .. } => "api",
            SwarmError::Unavailable(_) => "unavailable",
        }
    }
}
