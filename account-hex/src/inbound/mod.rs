//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the account service.

mod handlers;
mod server;

pub use handlers::ApiError;
pub use server::HttpServer;
