use tracing::debug;

use rtdeploy_model::{
    Env, ModelError, Runtime,
    encoding::{decode_env, decode_labels, is_runtime},
};
use rtdeploy_swarm::model::Service;

/// Reconstruct a runtime descriptor from a swarm service.
///
/// Missing labels, environment or update status leave the matching fields
/// unset. Environment entries that are not `KEY=VALUE` are skipped. A port
/// label that does not parse fails the decode.
pub fn to_runtime(service: &Service) -> Result<Runtime, ModelError> {
    let spec = &service.spec;
    let container = &spec.task_template.container_spec;
    if !is_runtime(&spec.labels) {
        debug!(service = %spec.name, "service carries no runtime marker label");
    }

    let environments = match &container.env {
        Some(entries) => {
            let decoded = decode_env(entries.iter().map(String::as_str));
            if !decoded.skipped.is_empty() {
                debug!(
                    service = %spec.name,
                    skipped = ?decoded.skipped,
                    "ignoring malformed environment entries"
                );
            }
            decoded.env
        }
        None => Env::new(),
    };

    let mut runtime = Runtime {
        id: Some(service.id.clone()),
        name: spec.name.clone(),
        image_name: container.image.clone(),
        scale: spec.mode.replicas(),
        environments,
        ..Default::default()
    };

    decode_labels(&spec.labels, &mut runtime)?;

    if let Some(update) = &service.update_status {
        runtime.state = update.state.clone();
        runtime.status_text = update.message.clone();
    }
    Ok(runtime)
}
