pub mod health;
pub mod log_activity;

pub use health::health_handler;
pub use log_activity::log_activity_handler;
