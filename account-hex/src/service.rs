//! Account Application Service
//!
//! Composes the payment record fetched through the provider port with the
//! current description snapshot. Contains no transport logic.

use std::sync::Arc;

use demo_types::{AccountId, AccountInfo, AppError, PaymentInfoProvider};

use crate::properties::RefreshableProperties;

/// Application service behind `GET /accounts/{id}`.
///
/// Generic over `P: PaymentInfoProvider` - the HTTP client in production,
/// an in-memory provider in tests.
pub struct AccountService<P: PaymentInfoProvider> {
    payments: P,
    properties: Arc<RefreshableProperties>,
}

impl<P: PaymentInfoProvider> AccountService<P> {
    /// Creates a new account service with the given collaborators.
    pub fn new(payments: P, properties: Arc<RefreshableProperties>) -> Self {
        Self {
            payments,
            properties,
        }
    }

    /// Returns a reference to the underlying payment provider.
    pub fn payments(&self) -> &P {
        &self.payments
    }

    pub fn properties(&self) -> &RefreshableProperties {
        &self.properties
    }

    /// Fetches the payment record for `id` and attaches the configured description.
    ///
    /// Provider failures are returned as-is; there is no retry and no
    /// fallback payload.
    pub async fn get_account_info(&self, id: AccountId) -> Result<AccountInfo, AppError> {
        let properties = self.properties.current().await;
        tracing::info!(
            "custom properties, description={}",
            properties.description.as_deref().unwrap_or("")
        );

        let payment_info = self.payments.get_payment_info(id).await?;

        Ok(AccountInfo::new(payment_info, properties.description.clone()))
    }

    /// Re-reads the refreshable properties, returning the changed keys.
    pub async fn refresh_properties(&self) -> Result<Vec<String>, AppError> {
        let changed = self.properties.refresh().await?;
        tracing::info!(?changed, "Properties refreshed");
        Ok(changed)
    }
}
