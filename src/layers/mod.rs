pub mod cors;
pub mod profile_sink;
