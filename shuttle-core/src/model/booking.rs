use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// a completed reservation as reported by the backend for a single user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Booking {
    pub route_name: String,
    pub fare: f64,
    #[serde(default)]
    pub stops: Vec<String>,
}

impl Booking {
    pub fn stops_label(&self) -> String {
        if self.stops.is_empty() {
            String::from("Not available")
        } else {
            self.stops.iter().join(", ")
        }
    }
}
