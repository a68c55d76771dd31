/// Label keys that make up the runtime metadata schema.
///
/// The same set is written on the service and on its container spec, so tasks
/// spawned from the service carry it as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    /// Runtime flavour, e.g. `python:3.6`.
    RuntimeType,
    ModelName,
    ModelVersion,
    /// Constant marker identifying services managed by this layer.
    HydroServing,
    /// Effective externally published HTTP port.
    HttpPort,
    /// Port the serving application listens on inside the container.
    AppHttpPort,
}

impl LabelKey {
    /// Wire name of the label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LabelKey::RuntimeType => "runtimeType",
            LabelKey::ModelName => "modelName",
            LabelKey::ModelVersion => "modelVersion",
            LabelKey::HydroServing => "hydroServing",
            LabelKey::HttpPort => "httpPort",
            LabelKey::AppHttpPort => "appHttpPort",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LabelKey;
    use std::collections::HashSet;

    #[test]
    fn wire_names_are_unique() {
        let keys = [
            LabelKey::RuntimeType,
            LabelKey::ModelName,
            LabelKey::ModelVersion,
            LabelKey::HydroServing,
            LabelKey::HttpPort,
            LabelKey::AppHttpPort,
        ];
        let names: HashSet<_> = keys.iter().map(LabelKey::as_str).collect();
        assert_eq!(names.len(), keys.len());
    }

    #[test]
    fn wire_names_are_camel_case() {
        assert_eq!(LabelKey::HydroServing.as_str(), "hydroServing");
        assert_eq!(LabelKey::AppHttpPort.as_str(), "appHttpPort");
    }
}
