//! HTTP front-end of the rent predictor.

pub mod config;
pub mod render;
pub mod routes;

pub use config::ServerConfig;
pub use routes::{ErrorBody, configure};
