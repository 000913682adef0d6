pub mod adapters;
pub mod authentication;
pub mod configuration;
pub mod domain;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
pub mod utils;
