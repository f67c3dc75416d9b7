use serde::{Deserialize, Serialize};

/// display name the backend gives the administrator account
pub const ADMIN_DISPLAY_NAME: &str = "admin";

/// the logged-in user. created by login, removed by logout, and passed to every
/// operation that acts on behalf of the user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    #[serde(rename = "userName")]
    pub display_name: String,
}

impl Session {
    pub fn new(email: &str, display_name: &str) -> Session {
        Session {
            email: email.to_string(),
            display_name: display_name.to_string(),
        }
    }

    /// administrators manage routes instead of booking them
    pub fn is_admin(&self) -> bool {
        self.display_name == ADMIN_DISPLAY_NAME
    }
}
