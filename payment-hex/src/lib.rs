//! # Payment Hex
//!
//! Application service layer and HTTP adapter for the payment service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (delay, then record generation)
//! - `delay/` - Simulated latency strategies
//! - `inbound/` - HTTP adapter (Axum server)

pub mod delay;
pub mod inbound;
mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use delay::{DelayParseError, DelayStrategy};
pub use openapi::ApiDoc;
pub use service::PaymentService;
