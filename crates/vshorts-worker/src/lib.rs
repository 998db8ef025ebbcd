//! Configuration and shared startup for the vshorts binaries.

pub mod config;
pub mod logging;

pub use config::{RenderEnvConfig, UploadEnvConfig};
pub use logging::init_tracing;
