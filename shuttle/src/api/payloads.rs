//! request and response bodies, one pair per backend call.
use serde::{Deserialize, Serialize};
use shuttle_core::model::RouteId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookRideRequest {
    pub email: String,
    #[serde(rename = "routeId")]
    pub route_id: RouteId,
}

/// booking confirmation. `fare` and `new_balance` are reported on success.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookRideResponse {
    pub message: String,
    #[serde(default)]
    pub fare: Option<f64>,
    #[serde(default)]
    pub new_balance: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WalletBalanceResponse {
    pub wallet_balance: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RechargeRequest {
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RechargeResponse {
    pub new_balance: f64,
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginResponse {
    pub message: String,
    pub name: String,
    pub email: String,
    pub wallet_balance: f64,
}

/// shape of a non-2xx body. FastAPI-style backends use `detail`, which may be a
/// plain string or a list of validation errors.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}
