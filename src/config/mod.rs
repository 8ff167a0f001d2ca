//! Server configuration.
mod loader;
mod types;

pub use loader::load;
pub use types::{ConfigError, ServerSettings, UpstreamConfig, ValidationError};
