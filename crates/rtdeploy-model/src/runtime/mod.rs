mod descriptor;
pub use descriptor::Runtime;

mod instance;
pub use instance::{InstanceStatus, RuntimeInstance};
