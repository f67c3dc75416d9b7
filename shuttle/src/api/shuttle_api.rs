use shuttle_core::model::{Booking, Route, RouteDraft, RouteId};

use super::{
    ApiError, BookRideRequest, BookRideResponse, LoginRequest, LoginResponse, MessageResponse,
    RechargeRequest, RechargeResponse, RegisterRequest, RouteSource, WalletBalanceResponse,
};

/// the shuttle backend contract. one method per endpoint, each a single
/// request/response round trip with no retry.
pub trait ShuttleApi {
    fn list_routes(&self, source: RouteSource) -> Result<Vec<Route>, ApiError>;

    fn add_route(&self, route: &RouteDraft) -> Result<(), ApiError>;

    fn delete_route(&self, id: &RouteId) -> Result<(), ApiError>;

    /// the backend deducts the fare from the wallet and records the booking.
    fn book_ride(&self, request: &BookRideRequest) -> Result<BookRideResponse, ApiError>;

    fn wallet_balance(&self, email: &str) -> Result<WalletBalanceResponse, ApiError>;

    fn recharge_wallet(
        &self,
        email: &str,
        request: &RechargeRequest,
    ) -> Result<RechargeResponse, ApiError>;

    fn list_bookings(&self, email: &str) -> Result<Vec<Booking>, ApiError>;

    fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError>;

    fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}
