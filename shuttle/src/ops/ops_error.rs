use crate::{api::ApiError, session::SessionError};

#[derive(thiserror::Error, Debug)]
pub enum OpsError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("please fill in all required fields, missing: {0}")]
    MissingFields(String),
    #[error("please enter a valid amount, found {0}")]
    InvalidAmount(f64),
    #[error("route management requires an admin session, logged in as '{0}'")]
    AdminRequired(String),
    #[error("route '{0}' has no identifier and cannot be booked")]
    MissingRouteId(String),
    #[error("invalid route: {0}")]
    InvalidRoute(String),
}
