use serde::{Deserialize, Serialize};

/// coarse priority signal for a route. values the backend sends that are not one of
/// the three known levels are kept as-is in [`DemandLevel::Other`] and rank below
/// [`DemandLevel::Low`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
    Other(String),
}

impl DemandLevel {
    /// ordering key used when ranking routes for booking. higher is served first.
    pub fn rank(&self) -> u8 {
        match self {
            DemandLevel::High => 3,
            DemandLevel::Medium => 2,
            DemandLevel::Low => 1,
            DemandLevel::Other(_) => 0,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, DemandLevel::Other(_))
    }
}

impl From<&str> for DemandLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" => DemandLevel::High,
            "medium" => DemandLevel::Medium,
            "low" => DemandLevel::Low,
            _ => DemandLevel::Other(value.to_string()),
        }
    }
}

impl From<String> for DemandLevel {
    fn from(value: String) -> Self {
        DemandLevel::from(value.as_str())
    }
}

impl From<DemandLevel> for String {
    fn from(value: DemandLevel) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DemandLevel::High => "High",
            DemandLevel::Medium => "Medium",
            DemandLevel::Low => "Low",
            DemandLevel::Other(other) => other.as_str(),
        };
        write!(f, "{s}")
    }
}
