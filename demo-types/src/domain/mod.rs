//! Domain models shared by the account and payment services.

pub mod account;
pub mod payment;
pub mod properties;

pub use account::{AccountId, AccountInfo};
pub use payment::PaymentInfo;
pub use properties::CustomProperties;
