use clap::ValueEnum;
use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};
use shuttle_core::model::RouteId;

use super::ApiError;

/// which routes listing to read. the peak view is the one the ride search uses.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteSource {
    #[default]
    All,
    Peak,
}

/// the backend calls available to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ListRoutes(RouteSource),
    AddRoute,
    DeleteRoute(RouteId),
    BookRide,
    WalletBalance(String),
    RechargeWallet(String),
    ListBookings(String),
    Register,
    Login,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListRoutes(_) => Method::GET,
            Endpoint::AddRoute => Method::POST,
            Endpoint::DeleteRoute(_) => Method::DELETE,
            Endpoint::BookRide => Method::POST,
            Endpoint::WalletBalance(_) => Method::GET,
            Endpoint::RechargeWallet(_) => Method::PUT,
            Endpoint::ListBookings(_) => Method::GET,
            Endpoint::Register => Method::POST,
            Endpoint::Login => Method::POST,
        }
    }

    /// unencoded path segments below the backend base url
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            Endpoint::ListRoutes(RouteSource::All) => vec!["api", "routes"],
            Endpoint::ListRoutes(RouteSource::Peak) => vec!["api", "peak"],
            Endpoint::AddRoute => vec!["api", "routes"],
            Endpoint::DeleteRoute(id) => vec!["api", "routes", id.0.as_str()],
            Endpoint::BookRide => vec!["api", "book-ride"],
            Endpoint::WalletBalance(email) => vec!["api", "wallet", email.as_str()],
            Endpoint::RechargeWallet(email) => vec!["api", "wallet", "recharge", email.as_str()],
            Endpoint::ListBookings(email) => vec!["api", "bookings", email.as_str()],
            Endpoint::Register => vec!["api", "register"],
            Endpoint::Login => vec!["api", "login"],
        }
    }

    /// joins this endpoint onto `base`, percent-encoding each path segment.
    /// any path already on `base` is kept as a prefix.
    pub fn url(&self, base: &Url) -> Result<Url, ApiError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: base.to_string(),
                reason: String::from("url cannot be a base"),
            })?
            .pop_if_empty()
            .extend(self.path_segments());
        Ok(url)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} /{}", self.method(), self.path_segments().join("/"))
    }
}
