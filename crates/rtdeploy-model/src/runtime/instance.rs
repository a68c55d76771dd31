use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::Port;

/// Health of a single runtime replica.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum InstanceStatus {
    Up,
    Down,
}

impl InstanceStatus {
    /// Map an orchestrator task state.
    ///
    /// Only `running` (any case) counts as up.
    pub fn from_task_state(state: &str) -> Self {
        if state.eq_ignore_ascii_case("running") {
            InstanceStatus::Up
        } else {
            InstanceStatus::Down
        }
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InstanceStatus::Up => "UP",
            InstanceStatus::Down => "DOWN",
        })
    }
}

/// One live replica of a [`crate::Runtime`].
///
/// Computed on every listing call and never persisted. An instance always
/// carries a resolved host; replicas without one are not reported at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RuntimeInstance {
    /// Container id, if the orchestrator already started one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Id of the owning service.
    pub runtime_id: String,
    /// Address on the runtime network, without subnet suffix.
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_port: Option<Port>,
    pub status: InstanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_in_any_case_is_up() {
        for state in ["running", "RUNNING", "Running", "rUnNiNg"] {
            assert_eq!(InstanceStatus::from_task_state(state), InstanceStatus::Up);
        }
    }

    #[test]
    fn other_states_are_down() {
        for state in ["failed", "pending", "shutdown", "", "running "] {
            assert_eq!(
                InstanceStatus::from_task_state(state),
                InstanceStatus::Down,
                "state {state:?}"
            );
        }
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(InstanceStatus::Up.to_string(), "UP");
        assert_eq!(InstanceStatus::Down.to_string(), "DOWN");
    }

    #[test]
    fn serde_is_uppercase() {
        assert_eq!(serde_json::to_string(&InstanceStatus::Up).unwrap(), r#""UP""#);
        let back: InstanceStatus = serde_json::from_str(r#""DOWN""#).unwrap();
        assert_eq!(back, InstanceStatus::Down);
    }
}
