mod booking_selector;

pub use booking_selector::select_routes;
