mod session_error;
mod session_store;
mod user_session;

pub use session_error::SessionError;
pub use session_store::SessionStore;
pub use user_session::{Session, ADMIN_DISPLAY_NAME};
