//! Payment Application Service
//!
//! Produces synthetic payment records after a simulated processing delay.
//! Holds no per-request state; concurrent calls never observe each other.

use demo_types::{AccountId, PaymentInfo};

use crate::delay::DelayStrategy;

/// Application service behind `GET /paymentInfo/accounts/{id}`.
pub struct PaymentService {
    delay: DelayStrategy,
}

impl PaymentService {
    /// Creates a new payment service with the given delay strategy.
    pub fn new(delay: DelayStrategy) -> Self {
        Self { delay }
    }

    /// Returns the configured delay strategy.
    pub fn delay(&self) -> &DelayStrategy {
        &self.delay
    }

    /// Waits one sampled delay, then returns a record for `id` stamped
    /// with the current time.
    pub async fn get_payment_info(&self, id: AccountId) -> PaymentInfo {
        let pause = self.delay.sample(&mut rand::rng());
        tracing::debug!(account_id = %id, delay_ms = pause.as_millis() as u64, "Simulating processing delay");

        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }

        PaymentInfo::now(id)
    }
}

impl Default for PaymentService {
    fn default() -> Self {
        Self::new(DelayStrategy::default())
    }
}
