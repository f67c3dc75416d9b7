use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// high-traffic periods for a route. the routes listing returns these as free text
/// while routes created through the add-route form store a list of time windows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum PeakHours {
    Windows(Vec<String>),
    Text(String),
}

impl Default for PeakHours {
    fn default() -> Self {
        PeakHours::Windows(vec![])
    }
}

impl PeakHours {
    pub fn is_empty(&self) -> bool {
        match self {
            PeakHours::Windows(windows) => windows.iter().all(|w| w.trim().is_empty()),
            PeakHours::Text(text) => text.trim().is_empty(),
        }
    }
}

impl std::fmt::Display for PeakHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeakHours::Windows(windows) => write!(f, "{}", windows.iter().join(", ")),
            PeakHours::Text(text) => write!(f, "{text}"),
        }
    }
}
