use shuttle_core::{
    model::{Route, RouteDraft, RouteId},
    selector::select_routes,
};

use crate::{
    api::{RouteSource, ShuttleApi},
    session::Session,
};

use super::OpsError;

pub fn list_routes(api: &dyn ShuttleApi, source: RouteSource) -> Result<Vec<Route>, OpsError> {
    Ok(api.list_routes(source)?)
}

/// fetches the peak routes listing and returns the routes serving `location` in
/// booking priority order. an empty location returns nothing without a request.
pub fn search_routes(api: &dyn ShuttleApi, location: &str) -> Result<Vec<Route>, OpsError> {
    if location.is_empty() {
        return Ok(vec![]);
    }
    let routes = api.list_routes(RouteSource::Peak)?;
    let matches: Vec<Route> = select_routes(location, &routes)
        .into_iter()
        .cloned()
        .collect();
    log::info!(
        "{} of {} routes serve '{location}'",
        matches.len(),
        routes.len()
    );
    Ok(matches)
}

pub fn add_route(
    api: &dyn ShuttleApi,
    session: &Session,
    draft: &RouteDraft,
) -> Result<(), OpsError> {
    require_admin(session)?;
    api.add_route(draft)?;
    log::info!("added route '{}'", draft.name);
    Ok(())
}

pub fn delete_route(api: &dyn ShuttleApi, session: &Session, id: &RouteId) -> Result<(), OpsError> {
    require_admin(session)?;
    api.delete_route(id)?;
    log::info!("deleted route {id}");
    Ok(())
}

fn require_admin(session: &Session) -> Result<(), OpsError> {
    if session.is_admin() {
        Ok(())
    } else {
        Err(OpsError::AdminRequired(session.display_name.clone()))
    }
}
