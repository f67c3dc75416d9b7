//! user actions over the backend. each function performs zero or more
//! independent backend calls and surfaces any failure unchanged.
pub mod auth_ops;
pub mod booking_ops;
pub mod route_ops;
pub mod wallet_ops;

mod ops_error;

pub use ops_error::OpsError;
