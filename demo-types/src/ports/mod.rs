//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod payment_info;
mod properties;

pub use payment_info::PaymentInfoProvider;
pub use properties::{PropertiesSource, StaticProperties};
