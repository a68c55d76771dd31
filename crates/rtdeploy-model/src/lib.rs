mod domain;
pub use domain::{Env, KeyValue, Labels, Port};
pub use domain::{HTTP_PORT_OVERRIDE_ENV, RUNTIME_MARKER, SERVICE_TYPE_ENV};

mod error;
pub use error::{ModelError, ModelResult};

pub mod encoding;
pub use encoding::LabelKey;

mod runtime;
pub use runtime::{InstanceStatus, Runtime, RuntimeInstance};
