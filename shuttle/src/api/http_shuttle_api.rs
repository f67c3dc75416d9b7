use std::time::Duration;

use reqwest::{blocking::Client, Url};
use serde::{de::DeserializeOwned, Serialize};
use shuttle_core::model::{Booking, Route, RouteDraft, RouteId};

use super::{
    payloads::ErrorBody, ApiError, BookRideRequest, BookRideResponse, Endpoint, LoginRequest,
    LoginResponse, MessageResponse, RechargeRequest, RechargeResponse, RegisterRequest,
    RouteSource, ShuttleApi, WalletBalanceResponse,
};

/// [`ShuttleApi`] over HTTP using a blocking reqwest client.
pub struct HttpShuttleApi {
    client: Client,
    base_url: Url,
}

impl HttpShuttleApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<HttpShuttleApi, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: String::from("url cannot be a base"),
            });
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::ClientBuildError)?;
        Ok(HttpShuttleApi { client, base_url })
    }

    /// sends one request and returns the raw body of a 2xx response. any other
    /// status becomes [`ApiError::Backend`] carrying the backend's message.
    fn send<B: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let url = endpoint.url(&self.base_url)?;
        log::debug!("{endpoint} -> {url}");
        let mut request = self.client.request(endpoint.method(), url);
        if let Some(b) = body {
            request = request.json(b);
        }
        let response = request.send().map_err(|source| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;
        let status = response.status();
        let text = response.text().map_err(|source| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;
        log::debug!("{endpoint} <- {status}");
        if !status.is_success() {
            return Err(ApiError::Backend {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                detail: error_detail(status, &text),
            });
        }
        Ok(text)
    }

    fn call<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let text = self.send(endpoint, body)?;
        serde_json::from_str(&text).map_err(|source| ApiError::MalformedResponse {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

impl ShuttleApi for HttpShuttleApi {
    fn list_routes(&self, source: RouteSource) -> Result<Vec<Route>, ApiError> {
        self.call(&Endpoint::ListRoutes(source), None::<&()>)
    }

    fn add_route(&self, route: &RouteDraft) -> Result<(), ApiError> {
        self.send(&Endpoint::AddRoute, Some(route)).map(|_| ())
    }

    fn delete_route(&self, id: &RouteId) -> Result<(), ApiError> {
        self.send(&Endpoint::DeleteRoute(id.clone()), None::<&()>)
            .map(|_| ())
    }

    fn book_ride(&self, request: &BookRideRequest) -> Result<BookRideResponse, ApiError> {
        self.call(&Endpoint::BookRide, Some(request))
    }

    fn wallet_balance(&self, email: &str) -> Result<WalletBalanceResponse, ApiError> {
        self.call(&Endpoint::WalletBalance(email.to_string()), None::<&()>)
    }

    fn recharge_wallet(
        &self,
        email: &str,
        request: &RechargeRequest,
    ) -> Result<RechargeResponse, ApiError> {
        self.call(&Endpoint::RechargeWallet(email.to_string()), Some(request))
    }

    fn list_bookings(&self, email: &str) -> Result<Vec<Booking>, ApiError> {
        self.call(&Endpoint::ListBookings(email.to_string()), None::<&()>)
    }

    fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.call(&Endpoint::Register, Some(request))
    }

    fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.call(&Endpoint::Login, Some(request))?;
        if response.email.trim().is_empty() {
            return Err(ApiError::InvalidResponse {
                endpoint: Endpoint::Login.to_string(),
                reason: String::from("login succeeded without an email"),
            });
        }
        Ok(response)
    }
}

/// picks the most specific message out of an error body: `detail`, then `message`,
/// then the raw text, then the status reason.
fn error_detail(status: reqwest::StatusCode, text: &str) -> String {
    let body: ErrorBody = serde_json::from_str(text).unwrap_or_default();
    match (body.detail, body.message) {
        (Some(serde_json::Value::String(detail)), _) => detail,
        (Some(detail), _) if !detail.is_null() => detail.to_string(),
        (_, Some(message)) => message,
        _ if !text.trim().is_empty() => text.trim().to_string(),
        _ => format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("request failed")
        ),
    }
}
