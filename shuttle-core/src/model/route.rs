use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{DemandLevel, PeakHours};

/// opaque route identifier assigned by the backend
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RouteId(pub String);

impl From<&str> for RouteId {
    fn from(value: &str) -> Self {
        RouteId(value.to_string())
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// a shuttle route as listed by the backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Route {
    /// backend identifier. absent on records that were never stored.
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RouteId>,
    pub name: String,
    /// stop names in travel order
    #[serde(default)]
    pub stops: Vec<String>,
    #[serde(default)]
    pub peak_hours: PeakHours,
    pub demand_level: DemandLevel,
    pub active_shuttles: u32,
}

impl Route {
    /// true if any stop contains `needle` ignoring case. `needle` must already be lowercase.
    pub fn has_stop_containing(&self, needle: &str) -> bool {
        self.stops
            .iter()
            .any(|stop| stop.to_lowercase().contains(needle))
    }

    pub fn stops_label(&self) -> String {
        if self.stops.is_empty() {
            String::from("No stops available")
        } else {
            self.stops.iter().join(", ")
        }
    }

    pub fn peak_hours_label(&self) -> String {
        if self.peak_hours.is_empty() {
            String::from("N/A")
        } else {
            self.peak_hours.to_string()
        }
    }
}
