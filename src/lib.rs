pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod layers;
pub mod models;
pub mod request_id;
pub mod shutdown;
pub mod sinks;
pub mod telemetry;
