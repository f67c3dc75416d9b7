mod booking;
mod demand_level;
mod peak_hours;
mod route;
mod route_draft;

pub use booking::Booking;
pub use demand_level::DemandLevel;
pub use peak_hours::PeakHours;
pub use route::{Route, RouteId};
pub use route_draft::RouteDraft;
