use serde::{Deserialize, Serialize};

/// Network used to resolve instance addresses when no runtime network is configured.
///
/// Matches the engine's default container network.
pub const DEFAULT_NETWORK: &str = "bridge";

/// Deploy layer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Network every runtime service is attached to.
    ///
    /// `None` or a blank name means no explicit attachment is requested.
    pub network_name: Option<String>,
    /// Network matched against task attachments when `network_name` is unset.
    pub default_network: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            network_name: None,
            default_network: DEFAULT_NETWORK.to_string(),
        }
    }
}

impl DeployConfig {
    /// Config attaching runtimes to the given network.
    pub fn with_network(name: impl Into<String>) -> Self {
        Self {
            network_name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Network new services are attached to, if any.
    pub fn attach_network(&self) -> Option<&str> {
        self.network_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// Network whose addresses identify runtime instances.
    pub fn instance_network(&self) -> &str {
        self.attach_network().unwrap_or(self.default_network.as_str())
    }
}
