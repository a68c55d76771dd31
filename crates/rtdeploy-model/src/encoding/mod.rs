//! Label and environment vocabulary shared by the service encoder and decoders.
//!
//! The orchestrator has no typed metadata field, so runtime metadata travels as
//! string labels and `KEY=VALUE` environment entries. Every key name and every
//! format/parse rule for that side channel is defined here and nowhere else.
mod env;
pub use env::{DecodedEnv, decode_env, encode_env};

mod label;
pub use label::LabelKey;

use crate::{
    Env, HTTP_PORT_OVERRIDE_ENV, Labels, Port, RUNTIME_MARKER, Runtime,
    error::{ModelError, ModelResult},
};

/// Render a port the way it is stored in a label.
pub fn format_port(port: Port) -> String {
    port.to_string()
}

/// Parse a port label value. Surrounding whitespace is not accepted.
pub fn parse_port(key: LabelKey, raw: &str) -> ModelResult<Port> {
    raw.parse().map_err(|_| ModelError::InvalidLabel {
        key: key.as_str(),
        value: raw.to_string(),
    })
}

/// Read a port label, failing on a value that is not numeric.
///
/// A missing label is `Ok(None)`.
pub fn read_port(labels: &Labels, key: LabelKey) -> ModelResult<Option<Port>> {
    labels
        .get(key.as_str())
        .map(|raw| parse_port(key, raw))
        .transpose()
}

/// Read a port label, treating a malformed value the same as a missing one.
pub fn read_port_lenient(labels: &Labels, key: LabelKey) -> Option<Port> {
    read_port(labels, key).ok().flatten()
}

/// Externally published HTTP port for the `httpPort` label.
///
/// The [`HTTP_PORT_OVERRIDE_ENV`] variable wins over the descriptor's own port.
pub fn effective_http_port(env: &Env, http_port: Option<Port>) -> Option<String> {
    match env.get(HTTP_PORT_OVERRIDE_ENV) {
        Some(overridden) => Some(overridden.to_string()),
        None => http_port.map(format_port),
    }
}

/// Build the full label set describing a runtime.
///
/// Unset optional fields produce no label rather than a placeholder value.
pub fn encode_labels(runtime: &Runtime) -> Labels {
    let mut labels = Labels::new();
    labels.insert(LabelKey::HydroServing.as_str(), RUNTIME_MARKER);

    let optional = [
        (LabelKey::RuntimeType, runtime.runtime_type.clone()),
        (LabelKey::ModelName, runtime.model_name.clone()),
        (LabelKey::ModelVersion, runtime.model_version.clone()),
        (
            LabelKey::HttpPort,
            effective_http_port(&runtime.environments, runtime.http_port),
        ),
        (LabelKey::AppHttpPort, runtime.app_http_port.map(format_port)),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            labels.insert(key.as_str(), value);
        }
    }
    labels
}

/// Copy label-carried fields into `runtime`.
///
/// Missing labels leave the matching field untouched. A non-numeric port label
/// is a data-integrity violation and fails the whole decode.
pub fn decode_labels(labels: &Labels, runtime: &mut Runtime) -> ModelResult<()> {
    let text = |key: LabelKey| labels.get(key.as_str()).map(str::to_string);

    runtime.model_name = text(LabelKey::ModelName);
    runtime.model_version = text(LabelKey::ModelVersion);
    runtime.runtime_type = text(LabelKey::RuntimeType);
    runtime.http_port = read_port(labels, LabelKey::HttpPort)?;
    runtime.app_http_port = read_port(labels, LabelKey::AppHttpPort)?;
    Ok(())
}

/// Returns `true` if the labels carry the runtime marker.
pub fn is_runtime(labels: &Labels) -> bool {
    labels.get(LabelKey::HydroServing.as_str()) == Some(RUNTIME_MARKER)
}
