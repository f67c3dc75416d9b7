use crate::{api::ApiError, config::ClientConfigError, ops::OpsError, session::SessionError};

#[derive(thiserror::Error, Debug)]
pub enum ShuttleAppError {
    #[error(transparent)]
    ConfigError(#[from] ClientConfigError),
    #[error(transparent)]
    ApiError(#[from] ApiError),
    #[error(transparent)]
    OpsError(#[from] OpsError),
    #[error(transparent)]
    SessionError(#[from] SessionError),
    #[error("please log in to {0}")]
    LoginRequired(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("failed reading password from standard input: {0}")]
    PasswordReadError(std::io::Error),
}
