//! in-memory backend used by operation and app tests.
use std::cell::RefCell;
use std::collections::HashMap;

use shuttle_core::model::{Booking, PeakHours, Route, RouteDraft, RouteId};

use super::{
    ApiError, BookRideRequest, BookRideResponse, Endpoint, LoginRequest, LoginResponse,
    MessageResponse, RechargeRequest, RechargeResponse, RegisterRequest, RouteSource, ShuttleApi,
    WalletBalanceResponse,
};

pub const FARE: f64 = 25.0;

struct Account {
    name: String,
    password: String,
    balance: f64,
    bookings: Vec<Booking>,
}

#[derive(Default)]
pub struct FakeShuttleApi {
    routes: RefCell<Vec<Route>>,
    accounts: RefCell<HashMap<String, Account>>,
    calls: RefCell<Vec<Endpoint>>,
    next_id: RefCell<usize>,
}

impl FakeShuttleApi {
    pub fn with_routes(routes: Vec<Route>) -> FakeShuttleApi {
        let api = FakeShuttleApi::default();
        *api.routes.borrow_mut() = routes;
        api
    }

    pub fn with_account(self, email: &str, name: &str, password: &str, balance: f64) -> Self {
        self.accounts.borrow_mut().insert(
            email.to_string(),
            Account {
                name: name.to_string(),
                password: password.to_string(),
                balance,
                bookings: vec![],
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.borrow().clone()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }

    pub fn balance(&self, email: &str) -> Option<f64> {
        self.accounts.borrow().get(email).map(|a| a.balance)
    }

    fn record(&self, endpoint: Endpoint) {
        self.calls.borrow_mut().push(endpoint);
    }

    fn rejected(endpoint: Endpoint, status: u16, detail: &str) -> ApiError {
        ApiError::Backend {
            endpoint: endpoint.to_string(),
            status,
            detail: detail.to_string(),
        }
    }
}

pub fn route(id: &str, stops: &[&str], demand_level: &str, active_shuttles: u32) -> Route {
    Route {
        id: Some(RouteId::from(id)),
        name: format!("Route {id}"),
        stops: stops.iter().map(|s| s.to_string()).collect(),
        peak_hours: PeakHours::Text(String::from("08:00-10:00")),
        demand_level: demand_level.into(),
        active_shuttles,
    }
}

impl ShuttleApi for FakeShuttleApi {
    fn list_routes(&self, source: RouteSource) -> Result<Vec<Route>, ApiError> {
        self.record(Endpoint::ListRoutes(source));
        Ok(self.routes.borrow().clone())
    }

    fn add_route(&self, draft: &RouteDraft) -> Result<(), ApiError> {
        self.record(Endpoint::AddRoute);
        let mut next_id = self.next_id.borrow_mut();
        *next_id += 1;
        self.routes.borrow_mut().push(Route {
            id: Some(RouteId(format!("new-{next_id}"))),
            name: draft.name.clone(),
            stops: draft.stops.clone(),
            peak_hours: PeakHours::Windows(draft.peak_hours.clone()),
            demand_level: draft.demand_level.clone(),
            active_shuttles: draft.active_shuttles,
        });
        Ok(())
    }

    fn delete_route(&self, id: &RouteId) -> Result<(), ApiError> {
        let endpoint = Endpoint::DeleteRoute(id.clone());
        self.record(endpoint.clone());
        let mut routes = self.routes.borrow_mut();
        let before = routes.len();
        routes.retain(|r| r.id.as_ref() != Some(id));
        if routes.len() == before {
            return Err(Self::rejected(endpoint, 404, "Route not found"));
        }
        Ok(())
    }

    fn book_ride(&self, request: &BookRideRequest) -> Result<BookRideResponse, ApiError> {
        self.record(Endpoint::BookRide);
        let route = self
            .routes
            .borrow()
            .iter()
            .find(|r| r.id.as_ref() == Some(&request.route_id))
            .cloned()
            .ok_or_else(|| Self::rejected(Endpoint::BookRide, 404, "Route not found"))?;
        let mut accounts = self.accounts.borrow_mut();
        let account = accounts
            .get_mut(&request.email)
            .ok_or_else(|| Self::rejected(Endpoint::BookRide, 404, "User not found"))?;
        if account.balance < FARE {
            return Err(Self::rejected(Endpoint::BookRide, 400, "Insufficient balance"));
        }
        account.balance -= FARE;
        account.bookings.push(Booking {
            route_name: route.name.clone(),
            fare: FARE,
            stops: route.stops.clone(),
        });
        Ok(BookRideResponse {
            message: String::from("Ride booked successfully"),
            fare: Some(FARE),
            new_balance: Some(account.balance),
        })
    }

    fn wallet_balance(&self, email: &str) -> Result<WalletBalanceResponse, ApiError> {
        let endpoint = Endpoint::WalletBalance(email.to_string());
        self.record(endpoint.clone());
        self.balance(email)
            .map(|wallet_balance| WalletBalanceResponse { wallet_balance })
            .ok_or_else(|| Self::rejected(endpoint, 404, "User not found"))
    }

    fn recharge_wallet(
        &self,
        email: &str,
        request: &RechargeRequest,
    ) -> Result<RechargeResponse, ApiError> {
        let endpoint = Endpoint::RechargeWallet(email.to_string());
        self.record(endpoint.clone());
        let mut accounts = self.accounts.borrow_mut();
        let account = accounts
            .get_mut(email)
            .ok_or_else(|| Self::rejected(endpoint, 404, "User not found"))?;
        account.balance += request.amount;
        Ok(RechargeResponse {
            new_balance: account.balance,
        })
    }

    fn list_bookings(&self, email: &str) -> Result<Vec<Booking>, ApiError> {
        self.record(Endpoint::ListBookings(email.to_string()));
        Ok(self
            .accounts
            .borrow()
            .get(email)
            .map(|a| a.bookings.clone())
            .unwrap_or_default())
    }

    fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.record(Endpoint::Register);
        let mut accounts = self.accounts.borrow_mut();
        if accounts.contains_key(&request.email) {
            return Err(Self::rejected(Endpoint::Register, 400, "Email already registered"));
        }
        accounts.insert(
            request.email.clone(),
            Account {
                name: request.name.clone(),
                password: request.password.clone(),
                balance: 0.0,
                bookings: vec![],
            },
        );
        Ok(MessageResponse {
            message: String::from("User registered successfully"),
        })
    }

    fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record(Endpoint::Login);
        let accounts = self.accounts.borrow();
        match accounts.get(&request.email) {
            Some(account) if account.password == request.password => Ok(LoginResponse {
                message: String::from("Login successful"),
                name: account.name.clone(),
                email: request.email.clone(),
                wallet_balance: account.balance,
            }),
            _ => Err(Self::rejected(Endpoint::Login, 401, "Invalid email or password")),
        }
    }
}
