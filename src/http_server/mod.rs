//! # HTTP Server Module
//!
//! Axum server exposing the roster over HTTP.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/list-rows`, `/students` - All records in a class table
//! - `/lookup-id`, `/get-tag` - Row id for one secondary ID

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod roster_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
