use rtdeploy_model::{
    Runtime,
    encoding::{encode_env, encode_labels},
};
use rtdeploy_swarm::model::{
    ContainerSpec, EndpointSpec, NetworkAttachmentConfig, ResolutionMode, ServiceMode,
    ServiceSpec, TaskSpec,
};

/// Build the service-creation request realizing `runtime`.
///
/// The same label set goes on the service and on its container spec. The
/// service is load-balanced behind a virtual IP and attached to `network`
/// when one is given. Placement, resources and restart policy are left to
/// the orchestrator defaults.
///
/// Nothing is validated here: an invalid name or empty image is reported by
/// the orchestrator on create.
pub fn to_service_spec(runtime: &Runtime, network: Option<&str>) -> ServiceSpec {
    let labels = encode_labels(runtime);

    ServiceSpec {
        name: runtime.name.clone(),
        labels: labels.clone(),
        task_template: TaskSpec {
            container_spec: ContainerSpec {
                image: runtime.image_name.clone(),
                env: Some(encode_env(&runtime.environments)),
                labels,
            },
        },
        mode: ServiceMode::replicated(runtime.scale),
        networks: network
            .filter(|n| !n.is_empty())
            .map(|n| vec![NetworkAttachmentConfig::new(n)])
            .unwrap_or_default(),
        endpoint_spec: Some(EndpointSpec {
            mode: ResolutionMode::Vip,
        }),
    }
}
