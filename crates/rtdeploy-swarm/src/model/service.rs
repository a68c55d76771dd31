use serde::{Deserialize, Serialize};

use rtdeploy_model::Labels;

/// Desired state of a service, as submitted on create.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
    pub task_template: TaskSpec,
    #[serde(default)]
    pub mode: ServiceMode,
    /// Networks the service is attached to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<NetworkAttachmentConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_spec: Option<EndpointSpec>,
}

/// Template every task of the service is created from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskSpec {
    pub container_spec: ContainerSpec,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSpec {
    pub image: String,
    /// `KEY=VALUE` entries. `None` when the service defines no environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
}

/// Scheduling mode of a service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceMode {
    /// Fixed number of replicas.
    Replicated(ReplicatedService),
    /// One task per node.
    Global {},
}

impl ServiceMode {
    pub fn replicated(replicas: Option<u64>) -> Self {
        ServiceMode::Replicated(ReplicatedService { replicas })
    }

    /// Replica count, if the mode is replicated and the count is set.
    pub fn replicas(&self) -> Option<u64> {
        match self {
            ServiceMode::Replicated(r) => r.replicas,
            ServiceMode::Global {} => None,
        }
    }
}

impl Default for ServiceMode {
    fn default() -> Self {
        ServiceMode::replicated(None)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicatedService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkAttachmentConfig {
    /// Network name or id.
    pub target: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl NetworkAttachmentConfig {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            aliases: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointSpec {
    pub mode: ResolutionMode,
}

/// How clients discover service tasks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// Single virtual IP load-balancing across tasks.
    #[default]
    Vip,
    /// DNS round-robin over task addresses.
    Dnsrr,
}

/// Service object as returned by the control plane.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
    #[serde(rename = "ID")]
    pub id: String,
    pub spec: ServiceSpec,
    /// Present while a rolling update is in progress or after one finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_status: Option<UpdateStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mode_uses_engine_api_shape() {
        let replicated = serde_json::to_value(ServiceMode::replicated(Some(3))).unwrap();
        assert_eq!(replicated, json!({"Replicated": {"Replicas": 3}}));

        let global = serde_json::to_value(ServiceMode::Global {}).unwrap();
        assert_eq!(global, json!({"Global": {}}));
    }

    #[test]
    fn replicas_only_for_replicated_mode() {
        assert_eq!(ServiceMode::replicated(Some(2)).replicas(), Some(2));
        assert_eq!(ServiceMode::replicated(None).replicas(), None);
        assert_eq!(ServiceMode::Global {}.replicas(), None);
    }

    #[test]
    fn service_deserializes_from_engine_json() {
        let raw = json!({
            "ID": "9mnpnzenvg8p8tdbtq4wvbkcz",
            "Version": {"Index": 19},
            "Spec": {
                "Name": "mnist",
                "Labels": {"modelName": "mnist"},
                "TaskTemplate": {
                    "ContainerSpec": {"Image": "serving:1", "Env": ["A=b"]},
                    "ForceUpdate": 0
                },
                "Mode": {"Replicated": {"Replicas": 2}},
                "EndpointSpec": {"Mode": "vip"}
            },
            "UpdateStatus": {"State": "updating", "Message": "update in progress"}
        });

        let svc: Service = serde_json::from_value(raw).unwrap();
        assert_eq!(svc.id, "9mnpnzenvg8p8tdbtq4wvbkcz");
        assert_eq!(svc.spec.name, "mnist");
        assert_eq!(svc.spec.labels.get("modelName"), Some("mnist"));
        assert_eq!(svc.spec.task_template.container_spec.image, "serving:1");
        assert_eq!(
            svc.spec.task_template.container_spec.env,
            Some(vec!["A=b".to_string()])
        );
        assert_eq!(svc.spec.mode.replicas(), Some(2));
        assert_eq!(
            svc.spec.endpoint_spec.map(|e| e.mode),
            Some(ResolutionMode::Vip)
        );
        let update = svc.update_status.unwrap();
        assert_eq!(update.state.as_deref(), Some("updating"));
    }

    #[test]
    fn dnsrr_endpoint_mode_reads_back() {
        let raw = json!({
            "ID": "x1",
            "Spec": {
                "Name": "legacy",
                "TaskTemplate": {"ContainerSpec": {"Image": "busybox"}},
                "EndpointSpec": {"Mode": "dnsrr"}
            }
        });

        let svc: Service = serde_json::from_value(raw).unwrap();
        assert_eq!(
            svc.spec.endpoint_spec.map(|e| e.mode),
            Some(ResolutionMode::Dnsrr)
        );
    }

    #[test]
    fn spec_serialization_skips_empty_parts() {
        let spec = ServiceSpec {
            name: "bare".into(),
            task_template: TaskSpec {
                container_spec: ContainerSpec {
                    image: "busybox".into(),
                    ..Default::default()
                },
            },
            ..Default::default()
        };

        let value = serde_json::to_value(&spec).unwrap();
        assert!(value.get("Labels").is_none());
        assert!(value.get("Networks").is_none());
        assert!(value.get("EndpointSpec").is_none());
        assert!(value["TaskTemplate"]["ContainerSpec"].get("Env").is_none());
    }
}
