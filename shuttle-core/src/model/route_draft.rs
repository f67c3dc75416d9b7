use serde::{Deserialize, Serialize};

use super::DemandLevel;

/// a new route as submitted by an administrator. serializes to the body expected by
/// the add-route endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteDraft {
    pub name: String,
    pub stops: Vec<String>,
    pub peak_hours: Vec<String>,
    pub demand_level: DemandLevel,
    pub active_shuttles: u32,
}

impl RouteDraft {
    /// builds a draft from form-style input where `stops` and `peak_hours` are comma
    /// separated. pieces are trimmed and blank pieces dropped.
    ///
    /// # Arguments
    ///
    /// * `name` - route display name, required
    /// * `stops` - comma separated stop names, at least one required
    /// * `peak_hours` - comma separated time windows, at least one required
    /// * `demand_level` - High, Medium or Low
    /// * `active_shuttles` - number of shuttles assigned
    ///
    /// # Returns
    ///
    /// * the draft, or a message naming the missing field
    pub fn from_form(
        name: &str,
        stops: &str,
        peak_hours: &str,
        demand_level: &str,
        active_shuttles: u32,
    ) -> Result<RouteDraft, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(String::from("route name is required"));
        }
        let stops = split_form_list(stops);
        if stops.is_empty() {
            return Err(String::from("at least one stop is required"));
        }
        let peak_hours = split_form_list(peak_hours);
        if peak_hours.is_empty() {
            return Err(String::from("at least one peak hour window is required"));
        }
        let demand_level = DemandLevel::from(demand_level);
        if !demand_level.is_known() {
            return Err(format!(
                "demand level must be one of High, Medium, Low, found '{demand_level}'"
            ));
        }
        Ok(RouteDraft {
            name: name.to_string(),
            stops,
            peak_hours,
            demand_level,
            active_shuttles,
        })
    }
}

fn split_form_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
