use std::cmp::Reverse;

use crate::model::Route;

/// finds the routes serving a location and orders them for booking.
///
/// a route matches when any of its stops contains `location_query` ignoring case.
/// matches are ordered by demand level (High, Medium, Low, then unrecognized levels)
/// and then by active shuttle count, both descending. remaining ties keep the order
/// of `routes`.
///
/// an empty query selects nothing.
///
/// # Arguments
///
/// * `location_query` - text to look for in stop names
/// * `routes` - routes as listed by the backend
///
/// # Returns
///
/// * matching routes in booking priority order
pub fn select_routes<'a>(location_query: &str, routes: &'a [Route]) -> Vec<&'a Route> {
    if location_query.is_empty() {
        return vec![];
    }
    let needle = location_query.to_lowercase();
    let mut matches: Vec<&Route> = routes
        .iter()
        .filter(|route| route.has_stop_containing(&needle))
        .collect();
    // stable sort, fetch order breaks remaining ties
    matches.sort_by_key(|route| Reverse((route.demand_level.rank(), route.active_shuttles)));
    matches
}
