mod api_error;
mod endpoint;
mod http_shuttle_api;
mod payloads;
mod shuttle_api;

#[cfg(test)]
pub(crate) mod fake_shuttle_api;

pub use api_error::ApiError;
pub use endpoint::{Endpoint, RouteSource};
pub use http_shuttle_api::HttpShuttleApi;
pub use payloads::{
    BookRideRequest, BookRideResponse, LoginRequest, LoginResponse, MessageResponse,
    RechargeRequest, RechargeResponse, RegisterRequest, WalletBalanceResponse,
};
pub use shuttle_api::ShuttleApi;
