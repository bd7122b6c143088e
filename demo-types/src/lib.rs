//! # Demo Types
//!
//! Domain types and port traits shared by the account and payment services.
//! This crate has no IO dependencies - only data structures and the
//! trait definitions the adapters implement.
//!
//! ## Architecture
//!
//! - `domain/` - Records exchanged between the services
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Application error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{AccountId, AccountInfo, CustomProperties, PaymentInfo};
pub use error::{AppError, PaymentInfoError, PropertiesError};
pub use ports::{PaymentInfoProvider, PropertiesSource, StaticProperties};
