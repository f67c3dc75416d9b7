pub mod model;
pub mod selector;
