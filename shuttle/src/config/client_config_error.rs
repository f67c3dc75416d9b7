#[derive(thiserror::Error, Debug)]
pub enum ClientConfigError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failed encoding configuration as TOML: {0}")]
    EncodeError(#[from] toml::ser::Error),
}
