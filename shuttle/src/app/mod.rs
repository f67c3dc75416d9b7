mod app_error;
mod display;
mod operation;
mod shuttle_app;

pub use app_error::ShuttleAppError;
pub use operation::ShuttleOperation;
pub use shuttle_app::ShuttleApp;
