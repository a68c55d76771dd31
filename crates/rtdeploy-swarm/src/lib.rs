//! Docker Swarm control-plane surface consumed by the deploy core.
//!
//! - [`model`] mirrors the subset of the Engine API objects the core reads and writes.
//! - [`SwarmClient`] is the seam a concrete API client plugs into.
//! - `memory` (feature) provides an in-process swarm for tests and demos.
mod client;
pub use client::{ServiceFilter, SwarmClient, TaskFilter};

mod error;
pub use error::SwarmError;

pub mod model;

#[cfg(feature = "memory")]
mod memory;
#[cfg(feature = "memory")]
pub use memory::InMemorySwarm;
