mod client_config;
mod client_config_error;

pub use client_config::{ClientConfig, DEFAULT_BASE_URL, ENV_PREFIX};
pub use client_config_error::ClientConfigError;
