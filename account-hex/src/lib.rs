//! # Account Hex
//!
//! Application service layer and HTTP adapter for the account service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (payment lookup + description)
//! - `properties/` - Refreshable `custom.*` properties
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: PaymentInfoProvider`, allowing
//! different provider implementations to be injected.

pub mod inbound;
mod openapi;
pub mod properties;
pub mod service;


pub use openapi::ApiDoc;
pub use properties::RefreshableProperties;
pub use service::AccountService;
