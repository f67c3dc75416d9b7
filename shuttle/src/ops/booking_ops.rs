use shuttle_core::model::{Booking, Route, RouteId};

use crate::{
    api::{BookRideRequest, BookRideResponse, ShuttleApi},
    session::Session,
};

use super::OpsError;

/// books a ride on `route_id` for the session user. the backend checks the balance,
/// deducts the fare and records the booking; its answer is returned unchanged.
///
/// repeated calls book repeatedly, there is no local de-duplication.
pub fn book_ride(
    api: &dyn ShuttleApi,
    session: &Session,
    route_id: &RouteId,
) -> Result<BookRideResponse, OpsError> {
    let request = BookRideRequest {
        email: session.email.clone(),
        route_id: route_id.clone(),
    };
    let response = api.book_ride(&request)?;
    log::info!(
        "booked route {route_id} for {}: fare={:?}, new_balance={:?}",
        session.email,
        response.fare,
        response.new_balance
    );
    Ok(response)
}

/// books a ride on a route taken from a listing or search result
pub fn book_route(
    api: &dyn ShuttleApi,
    session: &Session,
    route: &Route,
) -> Result<BookRideResponse, OpsError> {
    let id = route
        .id
        .as_ref()
        .ok_or_else(|| OpsError::MissingRouteId(route.name.clone()))?;
    book_ride(api, session, id)
}

pub fn list_bookings(api: &dyn ShuttleApi, session: &Session) -> Result<Vec<Booking>, OpsError> {
    Ok(api.list_bookings(&session.email)?)
}
