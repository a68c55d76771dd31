//! Well-known environment keys and marker values shared by the encoder and decoder.
//!
//! Label keys live in [`crate::LabelKey`]; this module only holds the values
//! that travel through the container environment.

/// Marker value written into the `hydroServing` label and the
/// [`SERVICE_TYPE_ENV`] sentinel entry.
pub const RUNTIME_MARKER: &str = "runtime";

/// Environment key of the sentinel entry appended to every runtime container.
///
/// Bootstrap tooling inside the image reads `SERVICE_TYPE=runtime` to detect
/// that it runs as a model-serving runtime.
pub const SERVICE_TYPE_ENV: &str = "SERVICE_TYPE";

/// Environment key that overrides the externally published HTTP port.
///
/// If a runtime environment carries this key, its value becomes the
/// `httpPort` label instead of [`crate::Runtime::http_port`].
pub const HTTP_PORT_OVERRIDE_ENV: &str = "ENVOY_HTTP_PORT";
