use tracing::trace;

use rtdeploy_model::{
    InstanceStatus, LabelKey, RuntimeInstance,
    encoding::read_port_lenient,
};
use rtdeploy_swarm::model::Task;

/// Separator between address and prefix length in attachment addresses.
const SUBNET_SEPARATOR: char = '/';

/// Address of `task` on `network`, without subnet suffix.
///
/// The first attachment on the network that carries a non-empty address wins.
pub fn resolve_host(task: &Task, network: &str) -> Option<String> {
    task.network_attachments
        .iter()
        .filter(|a| a.network_name() == network)
        .filter_map(|a| a.addresses.first())
        .map(|addr| match addr.split_once(SUBNET_SEPARATOR) {
            Some((host, _)) => host,
            None => addr.as_str(),
        })
        .find(|host| !host.is_empty())
        .map(str::to_string)
}

/// Map one task to a runtime instance.
///
/// Returns `None` when the task has no address on `network`. A missing or
/// malformed `httpPort` label leaves the port unset.
pub fn to_instance(task: &Task, network: &str) -> Option<RuntimeInstance> {
    let Some(host) = resolve_host(task, network) else {
        trace!(task = %task.id, network, "task has no address on runtime network");
        return None;
    };

    Some(RuntimeInstance {
        id: task
            .status
            .container_status
            .as_ref()
            .and_then(|c| c.container_id.clone()),
        runtime_id: task.service_id.clone(),
        host,
        http_port: read_port_lenient(&task.labels, LabelKey::HttpPort),
        status: InstanceStatus::from_task_state(&task.status.state),
        status_text: task.status.message.clone(),
    })
}

/// Map tasks to runtime instances, keeping input order.
///
/// Tasks without an address on `network` are left out; this never fails.
pub fn to_instances(tasks: &[Task], network: &str) -> Vec<RuntimeInstance> {
    tasks
        .iter()
        .filter_map(|task| to_instance(task, network))
        .collect()
}
