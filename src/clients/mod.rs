//! Domain-facing client wrappers around the raw store handle.

pub mod profile_client;

pub use profile_client::*;
