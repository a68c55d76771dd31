mod kv;
pub use kv::KeyValue;

mod env;
pub use env::Env;

mod labels;
pub use labels::Labels;

mod constants;
pub use constants::{HTTP_PORT_OVERRIDE_ENV, RUNTIME_MARKER, SERVICE_TYPE_ENV};

/// Port number as carried in port labels.
///
/// Signed 32-bit so every numeric label value reads back, including override
/// values outside the TCP range.
pub type Port = i32;
