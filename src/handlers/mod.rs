pub mod health;
pub mod save_profile;

pub use health::health_handler;
pub use save_profile::save_profile_handler;
