use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{Env, Port};

/// Application-level descriptor of a deployable model-serving process.
///
/// A runtime is realized as one orchestrator service. Fields are grouped as:
/// - identity (`id`, `name`)
/// - deployment (`image_name`, `scale`)
/// - networking (`http_port`, `app_http_port`)
/// - provenance (`runtime_type`, `model_name`, `model_version`)
/// - free-form `environments`
/// - observed state (`state`, `status_text`), filled only when read back
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Runtime {
    /// Orchestrator-assigned service id. `None` until deployed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Service name. Must satisfy the orchestrator's naming rules.
    pub name: String,
    /// Container image reference.
    pub image_name: String,
    /// Desired replica count.
    ///
    /// When `None` on deploy the orchestrator's default applies; when `None`
    /// on read the service does not use replicated scheduling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_port: Option<Port>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_http_port: Option<Port>,
    /// Opaque runtime flavour, copied verbatim through labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_type: Option<String>,
    /// Opaque model name, copied verbatim through labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Opaque model version, copied verbatim through labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(default)]
    pub environments: Env,
    /// Rollout state reported by the orchestrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Rollout message reported by the orchestrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
}

impl Runtime {
    /// Create a runtime with a name and image and everything else unset.
    pub fn new(name: impl Into<String>, image_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_name: image_name.into(),
            ..Default::default()
        }
    }

    /// Set the desired replica count.
    pub fn with_scale(mut self, scale: u64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the model provenance labels.
    pub fn with_model(
        mut self,
        runtime_type: impl Into<String>,
        model_name: impl Into<String>,
        model_version: impl Into<String>,
    ) -> Self {
        self.runtime_type = Some(runtime_type.into());
        self.model_name = Some(model_name.into());
        self.model_version = Some(model_version.into());
        self
    }

    /// Set the external and in-container HTTP ports.
    pub fn with_ports(mut self, http_port: Port, app_http_port: Port) -> Self {
        self.http_port = Some(http_port);
        self.app_http_port = Some(app_http_port);
        self
    }

    /// Add one environment variable.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environments.insert(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Runtime;

    #[test]
    fn builders_fill_fields() {
        let rt = Runtime::new("mnist", "serving:1")
            .with_scale(3)
            .with_model("python:3.6", "mnist", "2")
            .with_ports(8080, 9090)
            .with_env("FOO", "bar");

        assert_eq!(rt.name, "mnist");
        assert_eq!(rt.image_name, "serving:1");
        assert_eq!(rt.scale, Some(3));
        assert_eq!(rt.runtime_type.as_deref(), Some("python:3.6"));
        assert_eq!(rt.model_version.as_deref(), Some("2"));
        assert_eq!(rt.http_port, Some(8080));
        assert_eq!(rt.app_http_port, Some(9090));
        assert_eq!(rt.environments.get("FOO"), Some("bar"));
        assert!(rt.id.is_none());
        assert!(rt.state.is_none());
    }

    #[test]
    fn serde_uses_camel_case_and_skips_unset() {
        let rt = Runtime::new("mnist", "serving:1").with_ports(8080, 9090);
        let json = serde_json::to_value(&rt).unwrap();

        assert_eq!(json["imageName"], "serving:1");
        assert_eq!(json["httpPort"], 8080);
        assert_eq!(json["appHttpPort"], 9090);
        assert!(json.get("scale").is_none());
        assert!(json.get("statusText").is_none());
    }

    #[test]
    fn serde_defaults_missing_environment() {
        let rt: Runtime =
            serde_json::from_str(r#"{"name":"a","imageName":"b"}"#).unwrap();
        assert!(rt.environments.is_empty());
        assert!(rt.scale.is_none());
    }
}
