//! Payment info provider port.
//!
//! The account service depends on this trait to reach the payment service.
//! The HTTP client implements it; tests use in-memory stand-ins.

use crate::domain::{AccountId, PaymentInfo};
use crate::error::PaymentInfoError;

/// Port trait for fetching payment records.
#[async_trait::async_trait]
pub trait PaymentInfoProvider: Send + Sync + 'static {
    /// Fetches the payment record for the given account.
    async fn get_payment_info(&self, id: AccountId) -> Result<PaymentInfo, PaymentInfoError>;
}
