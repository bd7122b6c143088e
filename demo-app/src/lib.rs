//! # Demo Application
//!
//! Shared wiring for the `payment-server` and `account-server` binaries:
//! - Configuration loading from environment (and `.env`)
//! - The refreshable properties source
//! - Shutdown signal handling

pub mod config;
mod shutdown;

pub use config::{AccountConfig, EnvProperties, PaymentConfig, VaultSecret};
pub use shutdown::shutdown_signal;
