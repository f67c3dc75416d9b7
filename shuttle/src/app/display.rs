//! plain-text rendering of backend records for the terminal.
use itertools::Itertools;
use shuttle_core::model::{Booking, Route};

use crate::api::BookRideResponse;

pub fn money(amount: f64) -> String {
    format!("₹{amount:.2}")
}

pub fn route_card(route: &Route) -> String {
    let id = route
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| String::from("-"));
    format!(
        "{} [{id}]\n  Stops: {}\n  Peak Hours: {}\n  Demand: {}\n  Shuttles: {}",
        route.name,
        route.stops_label(),
        route.peak_hours_label(),
        route.demand_level,
        route.active_shuttles
    )
}

pub fn route_list(routes: &[Route], empty_message: &str, numbered: bool) -> String {
    if routes.is_empty() {
        return empty_message.to_string();
    }
    routes
        .iter()
        .enumerate()
        .map(|(idx, route)| {
            if numbered {
                format!("{}. {}", idx + 1, route_card(route))
            } else {
                route_card(route)
            }
        })
        .join("\n")
}

pub fn booking_list(bookings: &[Booking]) -> String {
    if bookings.is_empty() {
        return String::from("No rides booked yet.");
    }
    bookings
        .iter()
        .map(|b| {
            format!(
                "{}\n  Fare: {}\n  Stops: {}",
                b.route_name,
                money(b.fare),
                b.stops_label()
            )
        })
        .join("\n")
}

pub fn confirmation(response: &BookRideResponse) -> String {
    let mut lines = vec![response.message.clone()];
    if let Some(fare) = response.fare {
        lines.push(format!("Fare: {}", money(fare)));
    }
    if let Some(balance) = response.new_balance {
        lines.push(format!("Wallet balance: {}", money(balance)));
    }
    lines.join("\n")
}
